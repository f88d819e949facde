use crate::api::StoreRatingsClient;
use crate::components::loading::Loading;
use crate::routes::{self, MainRoute};
use crate::session::SessionState;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Application shell: restores the persisted session once, then routes.
#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<SessionState>();
    let restored = use_state(|| false);

    {
        let restored = restored.clone();
        let dispatch = dispatch;
        use_effect_with((), move |_| {
            let state = SessionState::restore();
            if let Some(session) = &state.session {
                StoreRatingsClient::shared().set_bearer_token(Some(session.token.clone()));
            }
            dispatch.set(state);
            restored.set(true);
            || ()
        });
    }

    if !*restored {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={routes::switch} />
        </BrowserRouter>
    }
}
