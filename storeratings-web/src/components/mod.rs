pub mod alert;
pub mod form_field;
pub mod loading;
pub mod star_rating;
pub mod stat_card;
