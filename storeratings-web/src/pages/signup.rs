use crate::api::StoreRatingsClient;
use crate::components::alert::ErrorAlert;
use crate::components::form_field::FormField;
use crate::routes::MainRoute;
use crate::session::{self, Session, SessionState};
use crate::validation::{FieldErrors, SignupForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let (_state, dispatch) = use_store::<SessionState>();
    let form = use_state(SignupForm::default);
    let errors = use_state(FieldErrors::new);
    let form_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let navigator = use_navigator();

    let update_field = |apply: fn(&mut SignupForm, String)| {
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
    let on_name_input = update_field(|form, value| form.name = value);
    let on_email_input = update_field(|form, value| form.email = value);
    let on_address_input = update_field(|form, value| form.address = value);
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
            spawn_local(async move {
                let client = StoreRatingsClient::shared();
                match client.signup(&current.to_request()).await {
                    Ok(response) => {
                        session::establish(
                            &dispatch,
                            Session {
                                token: response.token,
                                user: response.user,
                            },
                        );
                        if let Some(navigator) = navigator {
                            navigator.push(&MainRoute::Stores);
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
                    <h2 class="card-title text-2xl">{"Create your account"}</h2>
                    <p class="text-base-content/70">{"Join us to start rating and discovering stores"}</p>
                    if let Some(message) = &*form_error {
                        <ErrorAlert message={message.clone()} />
                    }
                    <FormField label="Full name" error={field_error("name")} help="2-60 characters">
                        <input
                            class="input input-bordered"
                            type="text"
                            placeholder="Your full name"
                            autocomplete="name"
                            value={form.name.clone()}
                            oninput={on_name_input}
                        />
                    </FormField>
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
                    <FormField label="Address" error={field_error("address")} help="Optional">
                        <input
                            class="input input-bordered"
                            type="text"
                            placeholder="Your address (optional)"
                            autocomplete="address-line1"
                            value={form.address.clone()}
                            oninput={on_address_input}
                        />
                    </FormField>
                    <FormField
                        label="Password"
                        error={field_error("password")}
                        help="8-16 chars, 1 uppercase, 1 special"
                    >
                        <input
                            class="input input-bordered"
                            type="password"
                            placeholder="••••••••"
                            autocomplete="new-password"
                            value={form.password.clone()}
                            oninput={on_password_input}
                        />
                    </FormField>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if *submitting { "Creating Account..." } else { "Create Account" }}
                        </button>
                    </div>
                    <p class="text-center text-base-content/70 mt-4">
                        {"Already have an account? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"Sign in here"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
