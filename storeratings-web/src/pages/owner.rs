use crate::api::StoreRatingsClient;
use crate::components::alert::ErrorAlert;
use crate::listing::RequestSequence;
use shared::models::OwnerDashboard;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Owner dashboard: aggregate ratings for every store assigned to the caller.
#[function_component(OwnerPage)]
pub fn owner_page() -> Html {
    let dashboard = use_state(OwnerDashboard::default);
    let error = use_state(|| None::<String>);
    let sequence = use_state(RequestSequence::default);

    {
        let dashboard = dashboard.clone();
        let error = error.clone();
        let sequence = (*sequence).clone();
        use_effect_with((), move |_| {
            let tag = sequence.begin();
            spawn_local(async move {
                match StoreRatingsClient::shared().owner_dashboard().await {
                    Ok(data) => {
                        if sequence.is_current(tag) {
                            dashboard.set(data);
                            error.set(None);
                        }
                    }
                    Err(err) => {
                        if sequence.is_current(tag) {
                            error.set(Some(err.to_string()));
                        }
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold">{"Owner Dashboard"}</h2>
                <p class="text-base-content/70">{"Manage your stores and view customer ratings"}</p>
            </div>

            if let Some(message) = &*error {
                <ErrorAlert message={message.clone()} />
            }

            if dashboard.stores.is_empty() {
                <div class="card bg-base-100 shadow">
                    <div class="card-body text-center py-8">
                        <h3 class="text-lg font-medium">{"No Stores Found"}</h3>
                        <p class="text-base-content/60">
                            {"You don't have any stores assigned to your account yet."}
                        </p>
                    </div>
                </div>
            } else {
                { for dashboard.stores.iter().map(|store| html! {
                    <div class="card bg-base-100 shadow" key={store.store_id}>
                        <div class="card-body">
                            <div class="flex items-start justify-between">
                                <h3 class="card-title">{store.store_name.clone()}</h3>
                                <div class="text-right">
                                    <div class="text-2xl font-bold text-primary">
                                        {format!("{:.2}", store.average_rating)}
                                    </div>
                                    <div class="text-sm text-base-content/60">
                                        {format!(
                                            "Average ({} {})",
                                            store.count,
                                            if store.count == 1 { "rating" } else { "ratings" },
                                        )}
                                    </div>
                                </div>
                            </div>

                            if store.ratings.is_empty() {
                                <div class="text-center py-4">
                                    <p class="text-base-content/60">{"No ratings yet for this store."}</p>
                                </div>
                            } else {
                                <div class="overflow-x-auto">
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>{"Customer"}</th>
                                                <th>{"Email"}</th>
                                                <th class="text-center">{"Rating"}</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            { for store.ratings.iter().map(|rating| html! {
                                                <tr key={rating.user_id}>
                                                    <td>{rating.name.clone()}</td>
                                                    <td>{rating.email.clone()}</td>
                                                    <td class="text-center font-medium text-primary">
                                                        {format!("★ {}", rating.rating)}
                                                    </td>
                                                </tr>
                                            }) }
                                        </tbody>
                                    </table>
                                </div>
                            }
                        </div>
                    </div>
                }) }
            }
        </div>
    }
}
