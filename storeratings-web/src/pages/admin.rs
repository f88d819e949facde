use crate::api::StoreRatingsClient;
use crate::components::alert::ErrorAlert;
use crate::components::form_field::FormField;
use crate::components::stat_card::StatCard;
use crate::listing::{RequestSequence, build_list_query};
use crate::validation::{FieldErrors, NewStoreForm, NewUserForm};
use shared::models::{AdminStats, SortDirection, StoreListItem, User, UserRole};
use std::str::FromStr;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Filter values for the admin user table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct UserFilters {
    name: String,
    email: String,
    address: String,
    role: String,
}

/// Filter values for the admin store table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct StoreFilters {
    name: String,
    email: String,
    address: String,
}

/// Admin dashboard: platform counters, add-user/add-store forms, and the
/// filtered, server-sorted user and store tables.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let stats = use_state(AdminStats::default);
    let users = use_state(Vec::<User>::new);
    let stores = use_state(Vec::<StoreListItem>::new);
    let page_error = use_state(|| None::<String>);

    let user_filters = use_state(UserFilters::default);
    let store_filters = use_state(StoreFilters::default);
    let users_sort_by = use_state(|| "name".to_string());
    let users_sort_dir = use_state(SortDirection::default);
    let stores_sort_by = use_state(|| "name".to_string());
    let stores_sort_dir = use_state(SortDirection::default);
    let users_sequence = use_state(RequestSequence::default);
    let stores_sequence = use_state(RequestSequence::default);

    let user_form = use_state(NewUserForm::default);
    let user_errors = use_state(FieldErrors::new);
    let user_form_error = use_state(|| None::<String>);
    let user_submitting = use_state(|| false);

    let store_form = use_state(NewStoreForm::default);
    let store_errors = use_state(FieldErrors::new);
    let store_form_error = use_state(|| None::<String>);
    let store_submitting = use_state(|| false);

    // The dashboard issues its three fetches concurrently and renders once
    // all of them have resolved.
    let load_all = {
        let stats = stats.clone();
        let users = users.clone();
        let stores = stores.clone();
        let page_error = page_error.clone();
        Callback::from(move |(): ()| {
            let stats = stats.clone();
            let users = users.clone();
            let stores = stores.clone();
            let page_error = page_error.clone();
            spawn_local(async move {
                let client = StoreRatingsClient::shared();
                let (stats_result, users_result, stores_result) = futures::join!(
                    client.admin_dashboard(),
                    client.admin_users(&[]),
                    client.admin_stores(&[]),
                );
                match (stats_result, users_result, stores_result) {
                    (Ok(counters), Ok(user_rows), Ok(store_rows)) => {
                        stats.set(counters);
                        users.set(user_rows);
                        stores.set(store_rows);
                        page_error.set(None);
                    }
                    (stats_result, users_result, stores_result) => {
                        if let Some(err) = [
                            stats_result.err(),
                            users_result.err(),
                            stores_result.err(),
                        ]
                        .into_iter()
                        .flatten()
                        .next()
                        {
                            page_error.set(Some(err.to_string()));
                        }
                    }
                }
            });
        })
    };

    {
        let load_all = load_all.clone();
        use_effect_with((), move |_| {
            load_all.emit(());
            || ()
        });
    }

    let apply_user_filters = {
        let users = users.clone();
        let page_error = page_error.clone();
        let user_filters = user_filters.clone();
        let users_sort_by = users_sort_by.clone();
        let users_sort_dir = users_sort_dir.clone();
        let sequence = (*users_sequence).clone();
        Callback::from(move |_: MouseEvent| {
            let users = users.clone();
            let page_error = page_error.clone();
            let filters = (*user_filters).clone();
            let query = build_list_query(
                &[
                    ("name", &filters.name),
                    ("email", &filters.email),
                    ("address", &filters.address),
                    ("role", &filters.role),
                ],
                &users_sort_by,
                *users_sort_dir,
            );
            let sequence = sequence.clone();
            let tag = sequence.begin();
            spawn_local(async move {
                match StoreRatingsClient::shared().admin_users(&query).await {
                    Ok(rows) => {
                        if sequence.is_current(tag) {
                            users.set(rows);
                            page_error.set(None);
                        }
                    }
                    Err(err) => {
                        if sequence.is_current(tag) {
                            page_error.set(Some(err.to_string()));
                        }
                    }
                }
            });
        })
    };

    let apply_store_filters = {
        let stores = stores.clone();
        let page_error = page_error.clone();
        let store_filters = store_filters.clone();
        let stores_sort_by = stores_sort_by.clone();
        let stores_sort_dir = stores_sort_dir.clone();
        let sequence = (*stores_sequence).clone();
        Callback::from(move |_: MouseEvent| {
            let stores = stores.clone();
            let page_error = page_error.clone();
            let filters = (*store_filters).clone();
            let query = build_list_query(
                &[
                    ("name", &filters.name),
                    ("email", &filters.email),
                    ("address", &filters.address),
                ],
                &stores_sort_by,
                *stores_sort_dir,
            );
            let sequence = sequence.clone();
            let tag = sequence.begin();
            spawn_local(async move {
                match StoreRatingsClient::shared().admin_stores(&query).await {
                    Ok(rows) => {
                        if sequence.is_current(tag) {
                            stores.set(rows);
                            page_error.set(None);
                        }
                    }
                    Err(err) => {
                        if sequence.is_current(tag) {
                            page_error.set(Some(err.to_string()));
                        }
                    }
                }
            });
        })
    };

    let update_user_form = |apply: fn(&mut NewUserForm, String)| {
        let user_form = user_form.clone();
        let user_errors = user_errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*user_form).clone();
                apply(&mut next, input.value());
                user_errors.set(next.validate());
                user_form.set(next);
            }
        })
    };
    let on_user_name_input = update_user_form(|form, value| form.name = value);
    let on_user_email_input = update_user_form(|form, value| form.email = value);
    let on_user_address_input = update_user_form(|form, value| form.address = value);
    let on_user_password_input = update_user_form(|form, value| form.password = value);
    let on_user_role_change = {
        let user_form = user_form.clone();
        let user_errors = user_errors.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(role) = UserRole::from_str(&select.value()) {
                    let mut next = (*user_form).clone();
                    next.role = role;
                    user_errors.set(next.validate());
                    user_form.set(next);
                }
            }
        })
    };

    let on_add_user = {
        let user_form = user_form.clone();
        let user_errors = user_errors.clone();
        let user_form_error = user_form_error.clone();
        let user_submitting = user_submitting.clone();
        let load_all = load_all.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *user_submitting {
                return;
            }

            let current = (*user_form).clone();
            let latest_errors = current.validate();
            if !latest_errors.is_empty() {
                user_errors.set(latest_errors);
                return;
            }

            user_submitting.set(true);
            user_form_error.set(None);

            let user_form = user_form.clone();
            let user_errors = user_errors.clone();
            let user_form_error = user_form_error.clone();
            let user_submitting = user_submitting.clone();
            let load_all = load_all.clone();
            spawn_local(async move {
                match StoreRatingsClient::shared()
                    .add_user(&current.to_request())
                    .await
                {
                    Ok(()) => {
                        user_form.set(NewUserForm::default());
                        user_errors.set(FieldErrors::new());
                        load_all.emit(());
                    }
                    Err(err) => {
                        user_form_error.set(Some(err.to_string()));
                    }
                }
                user_submitting.set(false);
            });
        })
    };

    let update_store_form = |apply: fn(&mut NewStoreForm, String)| {
        let store_form = store_form.clone();
        let store_errors = store_errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*store_form).clone();
                apply(&mut next, input.value());
                store_errors.set(next.validate());
                store_form.set(next);
            }
        })
    };
    let on_store_name_input = update_store_form(|form, value| form.name = value);
    let on_store_email_input = update_store_form(|form, value| form.email = value);
    let on_store_address_input = update_store_form(|form, value| form.address = value);
    let on_store_owner_input = update_store_form(|form, value| form.owner_id = value);

    let on_add_store = {
        let store_form = store_form.clone();
        let store_errors = store_errors.clone();
        let store_form_error = store_form_error.clone();
        let store_submitting = store_submitting.clone();
        let load_all = load_all.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *store_submitting {
                return;
            }

            let current = (*store_form).clone();
            let latest_errors = current.validate();
            if !latest_errors.is_empty() {
                store_errors.set(latest_errors);
                return;
            }

            store_submitting.set(true);
            store_form_error.set(None);

            let store_form = store_form.clone();
            let store_errors = store_errors.clone();
            let store_form_error = store_form_error.clone();
            let store_submitting = store_submitting.clone();
            let load_all = load_all.clone();
            spawn_local(async move {
                match StoreRatingsClient::shared()
                    .add_store(&current.to_request())
                    .await
                {
                    Ok(()) => {
                        store_form.set(NewStoreForm::default());
                        store_errors.set(FieldErrors::new());
                        load_all.emit(());
                    }
                    Err(err) => {
                        store_form_error.set(Some(err.to_string()));
                    }
                }
                store_submitting.set(false);
            });
        })
    };

    let update_user_filters = |apply: fn(&mut UserFilters, String)| {
        let user_filters = user_filters.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*user_filters).clone();
                apply(&mut next, input.value());
                user_filters.set(next);
            }
        })
    };
    let on_filter_user_name = update_user_filters(|filters, value| filters.name = value);
    let on_filter_user_email = update_user_filters(|filters, value| filters.email = value);
    let on_filter_user_address = update_user_filters(|filters, value| filters.address = value);
    let on_filter_user_role = {
        let user_filters = user_filters.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*user_filters).clone();
                next.role = select.value();
                user_filters.set(next);
            }
        })
    };

    let update_store_filters = |apply: fn(&mut StoreFilters, String)| {
        let store_filters = store_filters.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*store_filters).clone();
                apply(&mut next, input.value());
                store_filters.set(next);
            }
        })
    };
    let on_filter_store_name = update_store_filters(|filters, value| filters.name = value);
    let on_filter_store_email = update_store_filters(|filters, value| filters.email = value);
    let on_filter_store_address = update_store_filters(|filters, value| filters.address = value);

    let on_users_sort_by = {
        let users_sort_by = users_sort_by.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                users_sort_by.set(select.value());
            }
        })
    };
    let on_users_sort_dir = {
        let users_sort_dir = users_sort_dir.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(direction) = SortDirection::from_str(&select.value()) {
                    users_sort_dir.set(direction);
                }
            }
        })
    };
    let on_stores_sort_by = {
        let stores_sort_by = stores_sort_by.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                stores_sort_by.set(select.value());
            }
        })
    };
    let on_stores_sort_dir = {
        let stores_sort_dir = stores_sort_dir.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(direction) = SortDirection::from_str(&select.value()) {
                    stores_sort_dir.set(direction);
                }
            }
        })
    };

    let user_field_error =
        |key: &str| user_errors.get(key).map(|message| AttrValue::from(*message));
    let store_field_error = |key: &str| {
        store_errors
            .get(key)
            .map(|message| AttrValue::from(*message))
    };

    html! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title text-2xl">{"Admin Dashboard"}</h2>
                    if let Some(message) = &*page_error {
                        <ErrorAlert message={message.clone()} />
                    }
                    <div class="stats stats-vertical sm:stats-horizontal w-full">
                        <StatCard label="Total Users" value={stats.total_users.to_string()} />
                        <StatCard label="Total Stores" value={stats.total_stores.to_string()} />
                        <StatCard label="Total Ratings" value={stats.total_ratings.to_string()} />
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Add User"}</h3>
                        if let Some(message) = &*user_form_error {
                            <ErrorAlert message={message.clone()} />
                        }
                        <form onsubmit={on_add_user}>
                            <FormField label="Name" error={user_field_error("name")} help="2-60 characters">
                                <input
                                    class="input input-bordered"
                                    placeholder="Full name"
                                    value={user_form.name.clone()}
                                    oninput={on_user_name_input}
                                />
                            </FormField>
                            <FormField label="Email" error={user_field_error("email")}>
                                <input
                                    class="input input-bordered"
                                    type="email"
                                    placeholder="Email"
                                    value={user_form.email.clone()}
                                    oninput={on_user_email_input}
                                />
                            </FormField>
                            <FormField label="Address" error={user_field_error("address")}>
                                <input
                                    class="input input-bordered"
                                    placeholder="Address (optional)"
                                    value={user_form.address.clone()}
                                    oninput={on_user_address_input}
                                />
                            </FormField>
                            <FormField
                                label="Password"
                                error={user_field_error("password")}
                                help="8-16, 1 uppercase, 1 special"
                            >
                                <input
                                    class="input input-bordered"
                                    type="password"
                                    placeholder="Password"
                                    value={user_form.password.clone()}
                                    oninput={on_user_password_input}
                                />
                            </FormField>
                            <FormField label="Role" error={user_field_error("role")}>
                                <select class="select select-bordered" onchange={on_user_role_change}>
                                    { for UserRole::ALL.iter().map(|role| html! {
                                        <option
                                            value={role.as_str()}
                                            selected={user_form.role == *role}
                                        >
                                            {role.as_str()}
                                        </option>
                                    }) }
                                </select>
                            </FormField>
                            <div class="form-control mt-4">
                                <button
                                    class="btn btn-primary"
                                    type="submit"
                                    disabled={*user_submitting || !user_errors.is_empty()}
                                >
                                    {if *user_submitting { "Adding..." } else { "Add User" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Add Store"}</h3>
                        if let Some(message) = &*store_form_error {
                            <ErrorAlert message={message.clone()} />
                        }
                        <form onsubmit={on_add_store}>
                            <FormField label="Name" error={store_field_error("name")}>
                                <input
                                    class="input input-bordered"
                                    placeholder="Store name"
                                    value={store_form.name.clone()}
                                    oninput={on_store_name_input}
                                />
                            </FormField>
                            <FormField label="Email" error={store_field_error("email")}>
                                <input
                                    class="input input-bordered"
                                    type="email"
                                    placeholder="Email (optional)"
                                    value={store_form.email.clone()}
                                    oninput={on_store_email_input}
                                />
                            </FormField>
                            <FormField label="Address" error={store_field_error("address")}>
                                <input
                                    class="input input-bordered"
                                    placeholder="Address"
                                    value={store_form.address.clone()}
                                    oninput={on_store_address_input}
                                />
                            </FormField>
                            <FormField label="Owner ID" error={store_field_error("ownerId")}>
                                <input
                                    class="input input-bordered"
                                    placeholder="Owner user id (optional)"
                                    value={store_form.owner_id.clone()}
                                    oninput={on_store_owner_input}
                                />
                            </FormField>
                            <div class="form-control mt-4">
                                <button
                                    class="btn btn-primary"
                                    type="submit"
                                    disabled={*store_submitting || !store_errors.is_empty()}
                                >
                                    {if *store_submitting { "Adding..." } else { "Add Store" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h3 class="card-title">{"Users"}</h3>
                        <button class="btn" onclick={apply_user_filters}>{"Apply Filters"}</button>
                    </div>
                    <div class="flex flex-wrap gap-2 my-2">
                        <input
                            class="input input-bordered"
                            placeholder="Name"
                            value={user_filters.name.clone()}
                            oninput={on_filter_user_name}
                        />
                        <input
                            class="input input-bordered"
                            placeholder="Email"
                            value={user_filters.email.clone()}
                            oninput={on_filter_user_email}
                        />
                        <input
                            class="input input-bordered"
                            placeholder="Address"
                            value={user_filters.address.clone()}
                            oninput={on_filter_user_address}
                        />
                        <select class="select select-bordered" onchange={on_filter_user_role}>
                            <option value="" selected={user_filters.role.is_empty()}>{"All roles"}</option>
                            { for UserRole::ALL.iter().map(|role| html! {
                                <option
                                    value={role.as_str()}
                                    selected={user_filters.role == role.as_str()}
                                >
                                    {role.as_str()}
                                </option>
                            }) }
                        </select>
                        <select class="select select-bordered" onchange={on_users_sort_by}>
                            { for ["name", "email", "role"].iter().map(|field| html! {
                                <option value={*field} selected={*users_sort_by == *field}>{*field}</option>
                            }) }
                        </select>
                        <select class="select select-bordered" onchange={on_users_sort_dir}>
                            { for SortDirection::ALL.iter().map(|direction| html! {
                                <option
                                    value={direction.as_str()}
                                    selected={*users_sort_dir == *direction}
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
                                    <th>{"Email"}</th>
                                    <th>{"Address"}</th>
                                    <th>{"Role"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for users.iter().map(|user| html! {
                                    <tr key={user.id}>
                                        <td>{user.name.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>{user.address.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{user.role.as_str()}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h3 class="card-title">{"Stores"}</h3>
                        <button class="btn" onclick={apply_store_filters}>{"Apply Filters"}</button>
                    </div>
                    <div class="flex flex-wrap gap-2 my-2">
                        <input
                            class="input input-bordered"
                            placeholder="Name"
                            value={store_filters.name.clone()}
                            oninput={on_filter_store_name}
                        />
                        <input
                            class="input input-bordered"
                            placeholder="Email"
                            value={store_filters.email.clone()}
                            oninput={on_filter_store_email}
                        />
                        <input
                            class="input input-bordered"
                            placeholder="Address"
                            value={store_filters.address.clone()}
                            oninput={on_filter_store_address}
                        />
                        <select class="select select-bordered" onchange={on_stores_sort_by}>
                            { for ["name", "email"].iter().map(|field| html! {
                                <option value={*field} selected={*stores_sort_by == *field}>{*field}</option>
                            }) }
                        </select>
                        <select class="select select-bordered" onchange={on_stores_sort_dir}>
                            { for SortDirection::ALL.iter().map(|direction| html! {
                                <option
                                    value={direction.as_str()}
                                    selected={*stores_sort_dir == *direction}
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
                                    <th>{"Email"}</th>
                                    <th>{"Address"}</th>
                                    <th>{"Avg Rating"}</th>
                                    <th>{"Total Ratings"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for stores.iter().map(|store| html! {
                                    <tr key={store.id}>
                                        <td>{store.name.clone()}</td>
                                        <td>{store.email.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{store.address.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{format!("{:.2}", store.average_rating)}</td>
                                        <td>{store.total_ratings}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}
