pub mod appliance;
pub mod breach;
pub mod estimate;
pub mod history;
pub mod month;
pub mod preset;
pub mod status;
pub mod tariff;
pub mod tips;
pub mod usage;
