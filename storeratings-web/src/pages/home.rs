use crate::routes::MainRoute;
use crate::session::SessionState;
use shared::models::UserRole;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// Landing page with role-aware calls to action.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let user = use_selector(|state: &SessionState| state.user().cloned());
    let user_opt = (*user).clone();

    let heading = user_opt.as_ref().map_or_else(
        || "Rate your favorite stores".to_string(),
        |user| {
            let first_name = user.name.split_whitespace().next().unwrap_or(&user.name);
            format!("Welcome, {first_name}")
        },
    );
    let tagline = if user_opt.is_some() {
        "Jump back in to explore stores, rate them, or manage your dashboard."
    } else {
        "Discover stores, submit ratings, and manage your own store ratings."
    };

    html! {
        <div class="hero min-h-[60vh]">
            <div class="hero-content text-center">
                <div class="max-w-xl">
                    <h1 class="text-4xl font-bold">{heading}</h1>
                    <p class="py-6 text-base-content/70">{tagline}</p>
                    <div class="flex justify-center gap-3">
                        <Link<MainRoute> to={MainRoute::Stores} classes="btn btn-primary">
                            {"Browse Stores"}
                        </Link<MainRoute>>
                        if user_opt.is_none() {
                            <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-secondary">
                                {"Create Account"}
                            </Link<MainRoute>>
                        }
                        if user_opt.as_ref().map(|user| user.role) == Some(UserRole::Admin) {
                            <Link<MainRoute> to={MainRoute::Admin} classes="btn btn-secondary">
                                {"Admin Dashboard"}
                            </Link<MainRoute>>
                        }
                        if user_opt.as_ref().map(|user| user.role) == Some(UserRole::Owner) {
                            <Link<MainRoute> to={MainRoute::Owner} classes="btn btn-secondary">
                                {"Owner Dashboard"}
                            </Link<MainRoute>>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
