use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    /// Validation message for this field, if any.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Hint shown while the field has no error.
    #[prop_or_default]
    pub help: Option<AttrValue>,
    pub children: Children,
}

/// Labeled form control with the field's validation message underneath.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class="form-control w-full">
            <label class="label">
                <span class="label-text">{props.label.clone()}</span>
            </label>
            { props.children.clone() }
            if let Some(error) = &props.error {
                <label class="label">
                    <span class="label-text-alt text-error">{error.clone()}</span>
                </label>
            } else if let Some(help) = &props.help {
                <label class="label">
                    <span class="label-text-alt text-base-content/60">{help.clone()}</span>
                </label>
            }
        </div>
    }
}
