use crate::api;
use crate::web::router::{Link, use_router};
use inventory_shared::SignupRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SignupPage() -> impl IntoView {
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        if email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields.".to_string()));
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            let req = SignupRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            match api::signup(&req).await {
                // 注册完成后回到登录页
                Ok(()) => router.navigate("/login"),
                Err(_) => set_error_msg.set(Some("Signup failed".to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-sm">
                <h1 class="text-2xl font-bold text-center">"Signup"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="signup_password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="signup_password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing up..." }.into_any()
                                } else {
                                    "Signup".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>

                <div class="text-center">
                    <p>"Already have an account?"</p>
                    <Link to="/login" class="link link-primary">
                        "Login"
                    </Link>
                </div>
            </div>
        </div>
    }
}
