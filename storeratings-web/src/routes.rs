use crate::containers::layout::Layout;
use crate::pages::{
    AdminPage, HomePage, LoginPage, NotFoundPage, OwnerPage, ProfilePage, SignupPage, StoresPage,
};
use crate::session::SessionState;
use serde::{Deserialize, Serialize};
use shared::models::UserRole;
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The application routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/stores")]
    Stores,
    #[at("/admin")]
    Admin,
    #[at("/owner")]
    Owner,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Label under which the route appears in the top navigation for a user
    /// with `role`, or `None` when it does not belong there.
    #[must_use]
    pub fn nav_label(&self, role: Option<UserRole>) -> Option<&'static str> {
        match self {
            Self::Home => Some("Home"),
            Self::Stores => Some("Stores"),
            Self::Admin if role == Some(UserRole::Admin) => Some("Admin"),
            Self::Owner if role == Some(UserRole::Owner) => Some("Owner"),
            _ => None,
        }
    }
}

/// Query parameters carried to the login screen so a successful sign-in can
/// return the user to the screen they originally asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginQuery {
    /// Path of the guarded screen that redirected here.
    pub from: String,
}

/// Outcome of evaluating a guarded route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the protected content unchanged.
    Allow,
    /// No session: send the user to the login screen.
    RedirectToLogin,
    /// Signed in but the role is not admitted: send the user home.
    RedirectHome,
}

/// Decide whether a user with `role` may see a screen restricted to
/// `required_roles`. An empty list admits any authenticated user.
#[must_use]
pub fn guard_decision(role: Option<UserRole>, required_roles: &[UserRole]) -> GuardOutcome {
    match role {
        None => GuardOutcome::RedirectToLogin,
        Some(role) if required_roles.is_empty() || required_roles.contains(&role) => {
            GuardOutcome::Allow
        }
        Some(_) => GuardOutcome::RedirectHome,
    }
}

/// Pick where to land after login, honoring a `from` query parameter when it
/// names a known route.
#[must_use]
pub fn login_destination(from: Option<&str>) -> MainRoute {
    from.and_then(MainRoute::recognize).unwrap_or(MainRoute::Home)
}

#[derive(Properties, PartialEq)]
pub struct ProtectedProps {
    /// Roles admitted to the wrapped content; empty means any signed-in user.
    #[prop_or_default]
    pub roles: Vec<UserRole>,
    pub children: Children,
}

/// Role-gated wrapper around a screen. The decision is re-evaluated on every
/// render, so a logout while the screen is open redirects immediately.
#[function_component(Protected)]
pub fn protected(props: &ProtectedProps) -> Html {
    let role = use_selector(|state: &SessionState| state.role());

    match guard_decision(*role, &props.roles) {
        GuardOutcome::Allow => html! { <>{ props.children.clone() }</> },
        GuardOutcome::RedirectHome => html! { <Redirect<MainRoute> to={MainRoute::Home} /> },
        GuardOutcome::RedirectToLogin => html! { <RedirectToLogin /> },
    }
}

/// Navigate to the login screen, remembering the current path so login can
/// come back to it.
#[function_component(RedirectToLogin)]
fn redirect_to_login() -> Html {
    let navigator = use_navigator();
    let location = use_location();
    let from = location.map_or_else(|| "/".to_string(), |location| location.path().to_string());

    use_effect_with(from, move |from| {
        if let Some(navigator) = navigator {
            let query = LoginQuery { from: from.clone() };
            let _ = navigator.push_with_query(&MainRoute::Login, &query);
        }
        || ()
    });

    html! {}
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let has_session = use_selector(|state: &SessionState| state.session.is_some());
    let is_authenticated = *has_session;

    match props.route.clone() {
        MainRoute::Login => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Signup => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <SignupPage /> }
            }
        }
        MainRoute::Home => html! {
            <Layout current_route={MainRoute::Home}>
                <HomePage />
            </Layout>
        },
        MainRoute::Stores => html! {
            <Layout current_route={MainRoute::Stores}>
                <StoresPage />
            </Layout>
        },
        MainRoute::Admin => html! {
            <Layout current_route={MainRoute::Admin}>
                <Protected roles={vec![UserRole::Admin]}>
                    <AdminPage />
                </Protected>
            </Layout>
        },
        MainRoute::Owner => html! {
            <Layout current_route={MainRoute::Owner}>
                <Protected roles={vec![UserRole::Owner]}>
                    <OwnerPage />
                </Protected>
            </Layout>
        },
        MainRoute::Profile => html! {
            <Layout current_route={MainRoute::Profile}>
                <Protected>
                    <ProfilePage />
                </Protected>
            </Layout>
        },
        MainRoute::NotFound => html! {
            <Layout current_route={MainRoute::NotFound}>
                <NotFoundPage />
            </Layout>
        },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {route:?}").as_str());
    html! { <MainRouteView {route} /> }
}
