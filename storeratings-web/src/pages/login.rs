use crate::api::StoreRatingsClient;
use crate::components::alert::ErrorAlert;
use crate::components::form_field::FormField;
use crate::routes::{LoginQuery, MainRoute, login_destination};
use crate::session::{self, Session, SessionState};
use crate::validation::{FieldErrors, LoginForm};
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::{use_location, use_navigator};
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (_state, dispatch) = use_store::<SessionState>();
    let form = use_state(LoginForm::default);
    let errors = use_state(FieldErrors::new);
    let form_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let navigator = use_navigator();
    let location = use_location();

    let return_path = location
        .and_then(|location| location.query::<LoginQuery>().ok())
        .map(|query| query.from);

    let update_field = |apply: fn(&mut LoginForm, String)| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                apply(&mut next, input.value());
                errors.set(next.validate());
                form.set(next);
            }
        })
    };
    let on_email_input = update_field(|form, value| form.email = value);
    let on_password_input = update_field(|form, value| form.password = value);

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let form_error = form_error.clone();
        let submitting = submitting.clone();
        let dispatch = dispatch;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }

            // Guard against stale state: validate once more before the call.
            let current = (*form).clone();
            let latest_errors = current.validate();
            if !latest_errors.is_empty() {
                errors.set(latest_errors);
                return;
            }

            submitting.set(true);
            form_error.set(None);

            let form_error = form_error.clone();
            let submitting = submitting.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let return_path = return_path.clone();
            spawn_local(async move {
                let client = StoreRatingsClient::shared();
                let request = LoginRequest {
                    email: current.email.trim().to_string(),
                    password: current.password,
                };
                match client.login(&request).await {
                    Ok(response) => {
                        session::establish(
                            &dispatch,
                            Session {
                                token: response.token,
                                user: response.user,
                            },
                        );
                        if let Some(navigator) = navigator {
                            navigator.push(&login_destination(return_path.as_deref()));
                        }
                    }
                    Err(err) => {
                        form_error.set(Some(err.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let field_error = |key: &str| errors.get(key).map(|message| AttrValue::from(*message));
    let disable_submit = *submitting || !errors.is_empty();

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Welcome back"}</h2>
                    <p class="text-base-content/70">{"Sign in to your account to continue"}</p>
                    if let Some(message) = &*form_error {
                        <ErrorAlert message={message.clone()} />
                    }
                    <FormField label="Email" error={field_error("email")}>
                        <input
                            class="input input-bordered"
                            type="email"
                            placeholder="name@example.com"
                            autocomplete="email"
                            value={form.email.clone()}
                            oninput={on_email_input}
                        />
                    </FormField>
                    <FormField label="Password" error={field_error("password")}>
                        <input
                            class="input input-bordered"
                            type="password"
                            placeholder="••••••••"
                            autocomplete="current-password"
                            value={form.password.clone()}
                            oninput={on_password_input}
                        />
                    </FormField>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if *submitting { "Signing in..." } else { "Sign In" }}
                        </button>
                    </div>
                    <p class="text-center text-base-content/70 mt-4">
                        {"Don't have an account? "}
                        <Link<MainRoute> to={MainRoute::Signup} classes="link link-primary">
                            {"Create one here"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
