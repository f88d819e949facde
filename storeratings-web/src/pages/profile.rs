use crate::api::StoreRatingsClient;
use crate::components::alert::{ErrorAlert, SuccessAlert};
use crate::components::form_field::FormField;
use crate::validation::{FieldErrors, PasswordChangeForm};
use shared::models::UpdatePasswordRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Password-change screen for the signed-in user.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let form = use_state(PasswordChangeForm::default);
    let errors = use_state(FieldErrors::new);
    let form_error = use_state(|| None::<String>);
    let success = use_state(|| false);
    let submitting = use_state(|| false);

    let update_field = |apply: fn(&mut PasswordChangeForm, String)| {
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
    let on_old_password_input = update_field(|form, value| form.old_password = value);
    let on_new_password_input = update_field(|form, value| form.new_password = value);

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let form_error = form_error.clone();
        let success = success.clone();
        let submitting = submitting.clone();
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
            success.set(false);

            let form = form.clone();
            let errors = errors.clone();
            let form_error = form_error.clone();
            let success = success.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                let client = StoreRatingsClient::shared();
                let request = UpdatePasswordRequest {
                    old_password: current.old_password,
                    new_password: current.new_password,
                };
                match client.update_password(&request).await {
                    Ok(()) => {
                        success.set(true);
                        form.set(PasswordChangeForm::default());
                        errors.set(FieldErrors::new());
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
        <div class="hero py-12">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Update Password"}</h2>
                    <p class="text-base-content/70">{"Change your account password"}</p>
                    if *success {
                        <SuccessAlert message="Password updated successfully" />
                    }
                    if let Some(message) = &*form_error {
                        <ErrorAlert message={message.clone()} />
                    }
                    <FormField label="Current Password" error={field_error("oldPassword")}>
                        <input
                            class="input input-bordered"
                            type="password"
                            placeholder="Enter current password"
                            autocomplete="current-password"
                            value={form.old_password.clone()}
                            oninput={on_old_password_input}
                        />
                    </FormField>
                    <FormField
                        label="New Password"
                        error={field_error("newPassword")}
                        help="8-16 characters, 1 uppercase, 1 special character"
                    >
                        <input
                            class="input input-bordered"
                            type="password"
                            placeholder="Enter new password"
                            autocomplete="new-password"
                            value={form.new_password.clone()}
                            oninput={on_new_password_input}
                        />
                    </FormField>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if *submitting { "Updating..." } else { "Update Password" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
