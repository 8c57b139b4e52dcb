quantity!(CentsPerKilowattHour, "c/kWh");
