use crate::routes::MainRoute;
use crate::session::{self, SessionState};
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Top navigation bar: brand, role-aware links, and the session actions.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (state, dispatch) = use_store::<SessionState>();
    let navigator = use_navigator();
    let role = state.role();
    let signed_in = state.session.is_some();

    let on_logout = {
        let dispatch = dispatch;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            session::clear(&dispatch);
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Login);
            }
        })
    };

    html! {
        <nav class="navbar bg-base-300">
            <div class="flex-1">
                <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                    {"Store Ratings"}
                </Link<MainRoute>>
                <ul class="menu menu-horizontal px-1">
                    { for MainRoute::iter().filter_map(|route| {
                        route.nav_label(role).map(|label| {
                            let active = props.current_route.as_ref() == Some(&route);
                            html! {
                                <li>
                                    <Link<MainRoute>
                                        to={route.clone()}
                                        classes={classes!(active.then_some("active"))}
                                    >
                                        {label}
                                    </Link<MainRoute>>
                                </li>
                            }
                        })
                    }) }
                </ul>
            </div>
            <div class="flex-none gap-2">
                if signed_in {
                    <Link<MainRoute> to={MainRoute::Profile} classes="btn btn-ghost">
                        {"Profile"}
                    </Link<MainRoute>>
                    <button class="btn btn-ghost" onclick={on_logout}>{"Logout"}</button>
                } else {
                    <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost">
                        {"Login"}
                    </Link<MainRoute>>
                    <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-primary">
                        {"Sign Up"}
                    </Link<MainRoute>>
                }
            </div>
        </nav>
    }
}
