use crate::api::StoreRatingsClient;
use crate::components::alert::ErrorAlert;
use crate::components::star_rating::StarRating;
use crate::listing::{
    RatingEndpoint, RequestSequence, StoreSortField, rating_endpoint, sort_stores,
};
use crate::session::SessionState;
use crate::validation::validate_rating;
use shared::models::{RatingRequest, SortDirection, StoreListItem};
use std::collections::HashMap;
use std::str::FromStr;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Store browsing screen: search, client-side re-sort, and star ratings.
#[function_component(StoresPage)]
pub fn stores_page() -> Html {
    let stores = use_state(Vec::<StoreListItem>::new);
    let my_ratings = use_state(HashMap::<i64, u8>::new);
    let name_filter = use_state(String::new);
    let address_filter = use_state(String::new);
    let sort_field = use_state(StoreSortField::default);
    let sort_direction = use_state(SortDirection::default);
    let error = use_state(|| None::<String>);
    let sequence = use_state(RequestSequence::default);
    let user_id = use_selector(|state: &SessionState| state.user().map(|user| user.id));
    let signed_in = user_id.is_some();

    let load_stores = {
        let stores = stores.clone();
        let error = error.clone();
        let sequence = (*sequence).clone();
        Callback::from(move |(): ()| {
            let stores = stores.clone();
            let error = error.clone();
            let sequence = sequence.clone();
            let tag = sequence.begin();
            spawn_local(async move {
                match StoreRatingsClient::shared().list_stores().await {
                    Ok(list) => {
                        if sequence.is_current(tag) {
                            stores.set(list);
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
        })
    };

    {
        let load_stores = load_stores.clone();
        let my_ratings = my_ratings.clone();
        use_effect_with(*user_id, move |user_id| {
            load_stores.emit(());
            if user_id.is_some() {
                let my_ratings = my_ratings.clone();
                spawn_local(async move {
                    // Missing own-rating data only hides the overlay.
                    if let Ok(entries) = StoreRatingsClient::shared().my_ratings().await {
                        my_ratings.set(
                            entries
                                .iter()
                                .map(|entry| (entry.store_id, entry.rating))
                                .collect(),
                        );
                    }
                });
            }
            || ()
        });
    }

    let on_search = {
        let stores = stores.clone();
        let error = error.clone();
        let sequence = (*sequence).clone();
        let name_filter = name_filter.clone();
        let address_filter = address_filter.clone();
        Callback::from(move |_: MouseEvent| {
            let stores = stores.clone();
            let error = error.clone();
            let sequence = sequence.clone();
            let name = (*name_filter).clone();
            let address = (*address_filter).clone();
            let tag = sequence.begin();
            spawn_local(async move {
                match StoreRatingsClient::shared()
                    .search_stores(&name, &address)
                    .await
                {
                    Ok(list) => {
                        if sequence.is_current(tag) {
                            stores.set(list);
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
        })
    };

    let rate = {
        let my_ratings = my_ratings.clone();
        let error = error.clone();
        let load_stores = load_stores.clone();
        Callback::from(move |(store_id, value): (i64, u8)| {
            if let Err(invalid) = validate_rating(value) {
                error.set(Some(invalid.message().to_string()));
                return;
            }

            // Tentative overlay so the stars respond before the round-trip.
            let previous = my_ratings.get(&store_id).copied();
            let mut tentative = (*my_ratings).clone();
            tentative.insert(store_id, value);
            my_ratings.set(tentative.clone());

            let my_ratings = my_ratings.clone();
            let error = error.clone();
            let load_stores = load_stores.clone();
            spawn_local(async move {
                let client = StoreRatingsClient::shared();
                let request = RatingRequest {
                    store_id,
                    rating: value,
                };
                let result = match rating_endpoint(previous) {
                    RatingEndpoint::Create => client.rate_store(&request).await,
                    RatingEndpoint::Update => client.update_rating(&request).await,
                };
                match result {
                    // The reload is the source of truth for the aggregates.
                    Ok(()) => load_stores.emit(()),
                    Err(err) => {
                        let mut reverted = tentative;
                        match previous {
                            Some(prior) => {
                                reverted.insert(store_id, prior);
                            }
                            None => {
                                reverted.remove(&store_id);
                            }
                        }
                        my_ratings.set(reverted);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let on_name_input = {
        let name_filter = name_filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name_filter.set(input.value());
            }
        })
    };
    let on_address_input = {
        let address_filter = address_filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                address_filter.set(input.value());
            }
        })
    };
    let on_sort_field_change = {
        let sort_field = sort_field.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(field) = StoreSortField::from_str(&select.value()) {
                    sort_field.set(field);
                }
            }
        })
    };
    let on_sort_direction_change = {
        let sort_direction = sort_direction.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(direction) = SortDirection::from_str(&select.value()) {
                    sort_direction.set(direction);
                }
            }
        })
    };

    let mut visible = (*stores).clone();
    sort_stores(&mut visible, *sort_field, *sort_direction);

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h2 class="card-title text-2xl">{"Browse Stores"}</h2>
                    <button class="btn btn-primary" onclick={on_search}>{"Search"}</button>
                </div>

                if let Some(message) = &*error {
                    <ErrorAlert message={message.clone()} />
                }

                <div class="flex flex-wrap gap-2 my-2">
                    <input
                        class="input input-bordered"
                        placeholder="Search by name"
                        value={(*name_filter).clone()}
                        oninput={on_name_input}
                    />
                    <input
                        class="input input-bordered"
                        placeholder="Search by address"
                        value={(*address_filter).clone()}
                        oninput={on_address_input}
                    />
                    <select class="select select-bordered" onchange={on_sort_field_change}>
                        { for StoreSortField::iter().map(|field| html! {
                            <option value={field.as_str()} selected={*sort_field == field}>
                                {field.label()}
                            </option>
                        }) }
                    </select>
                    <select class="select select-bordered" onchange={on_sort_direction_change}>
                        { for SortDirection::ALL.iter().map(|direction| html! {
                            <option
                                value={direction.as_str()}
                                selected={*sort_direction == *direction}
                            >
                                {direction.as_str()}
                            </option>
                        }) }
                    </select>
                </div>

                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Address"}</th>
                                <th class="text-center">{"Overall"}</th>
                                <th class="text-center">{"My Rating"}</th>
                                <th class="text-center">{"Action"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for visible.iter().map(|store| {
                                let store_id = store.id;
                                let mine = my_ratings.get(&store_id).copied();
                                let on_rate = {
                                    let rate = rate.clone();
                                    Callback::from(move |value: u8| rate.emit((store_id, value)))
                                };
                                html! {
                                    <tr key={store_id}>
                                        <td class="font-medium">{store.name.clone()}</td>
                                        <td>{store.address.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td class="text-center font-medium text-primary">
                                            {format!("{:.2}", store.average_rating)}
                                        </td>
                                        <td class="text-center">
                                            { mine.map_or_else(
                                                || html! { <span class="text-base-content/50">{"-"}</span> },
                                                |value| html! { <span class="text-success">{format!("★ {value}")}</span> },
                                            ) }
                                        </td>
                                        <td class="text-center">
                                            if signed_in {
                                                <div class="flex justify-center">
                                                    <StarRating rating={mine} {on_rate} />
                                                </div>
                                            } else {
                                                <span class="text-sm text-base-content/50">{"Login to rate"}</span>
                                            }
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </div>

                if visible.is_empty() {
                    <div class="text-center py-8">
                        <p class="text-base-content/60">
                            {"No stores found. Try adjusting your search criteria."}
                        </p>
                    </div>
                }
            </div>
        </div>
    }
}
