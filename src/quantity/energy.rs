use std::ops::Mul;

use crate::quantity::{cost::Euros, price::CentsPerKilowattHour};

quantity!(KilowattHours, "kWh");

impl Mul<CentsPerKilowattHour> for KilowattHours {
    type Output = Euros;

    /// The price is quoted in cents, the cost is kept in euros.
    fn mul(self, rhs: CentsPerKilowattHour) -> Self::Output {
        Euros(self.0 * rhs.0 / 100.0)
    }
}
