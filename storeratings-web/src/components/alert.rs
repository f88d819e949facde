use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub message: AttrValue,
}

/// Single blocking error banner shown for any rejected operation.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &AlertProps) -> Html {
    html! {
        <div class="alert alert-error mb-4" role="alert">
            <span>{props.message.clone()}</span>
        </div>
    }
}

/// Confirmation banner for operations without a visible result of their own.
#[function_component(SuccessAlert)]
pub fn success_alert(props: &AlertProps) -> Html {
    html! {
        <div class="alert alert-success mb-4" role="status">
            <span>{props.message.clone()}</span>
        </div>
    }
}
