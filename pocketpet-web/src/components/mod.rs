pub mod action_bar;
pub mod pet_card;
pub mod stat_meter;
