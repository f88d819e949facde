use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    /// The caller's current rating of the store, if any.
    #[prop_or_default]
    pub rating: Option<u8>,
    /// Emits the chosen star value, 1-5.
    pub on_rate: Callback<u8>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Row of five stars; filled up to the current rating, clickable to rate.
#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    let current = props.rating.unwrap_or(0);

    html! {
        <div class="flex items-center gap-0.5">
            { for (1..=5u8).map(|value| {
                let on_rate = props.on_rate.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_rate.emit(value));
                let icon_id = if value <= current {
                    IconId::HeroiconsSolidStar
                } else {
                    IconId::HeroiconsOutlineStar
                };
                html! {
                    <button
                        type="button"
                        class="btn btn-ghost btn-xs px-0.5 text-warning"
                        title={format!("Rate {value}")}
                        disabled={props.disabled}
                        {onclick}
                    >
                        <Icon {icon_id} class={classes!("w-5", "h-5")} />
                    </button>
                }
            }) }
        </div>
    }
}
