quantity!(Euros, "€");
