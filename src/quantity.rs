#[macro_use]
mod macros;

mod cost;
mod energy;
mod price;
mod temperature;

pub use self::{
    cost::Euros,
    energy::KilowattHours,
    price::CentsPerKilowattHour,
    temperature::Celsius,
};
