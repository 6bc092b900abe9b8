//! 表单构件
//!
//! 各实体面板共用的带标签输入、选择器与模态框；
//! 逐字段错误渲染在对应控件下方。

use leptos::prelude::*;

/// 字段错误行
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <span class="text-error text-sm">{move || error.get().unwrap_or_default()}</span>
        </Show>
    }
}

/// 带标签文本输入（type 可为 text/email/password/date 等）
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(into, optional)] placeholder: String,
    value: RwSignal<String>,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id.clone()>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                class="input input-bordered w-full"
            />
            {error.map(|error| view! { <FieldError error=error /> })}
        </div>
    }
}

/// 带标签选择器；选项为 (提交值, 显示文案) 对，空值占位在最前
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    value: RwSignal<String>,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id.clone()>
                <span class="label-text">{label}</span>
            </label>
            <select
                id=id
                class="select select-bordered w-full"
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>{placeholder}</option>
                <For
                    each=move || options.get()
                    key=|(option_value, _)| option_value.clone()
                    children=move |(option_value, text)| {
                        let this_value = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == this_value
                            >
                                {text}
                            </option>
                        }
                    }
                />
            </select>
            {error.map(|error| view! { <FieldError error=error /> })}
        </div>
    }
}

/// 模态框（原生 dialog，经 NodeRef + Effect 驱动）
#[component]
pub fn Modal(
    /// 打开状态信号
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{move || title.get()}</h3>
                {children()}
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
