pub(crate) mod health;
pub(crate) mod trading_data;
