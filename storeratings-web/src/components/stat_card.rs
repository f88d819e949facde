use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
}

/// One counter tile on a dashboard.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat bg-base-200 rounded-box">
            <div class="stat-title">{props.label.clone()}</div>
            <div class="stat-value text-primary">{props.value.clone()}</div>
        </div>
    }
}
