//! Per-variant factories over already-collected constructor arguments.
//!
//! Each factory is bound 1:1 to a vehicle variant and is stateless beyond the
//! arguments it captures; the controller never constructs a variant directly.
use crate::vehicle::Vehicle;

/// Constructor arguments for one vehicle variant, gathered at the prompts.
#[derive(Debug, Clone)]
pub enum VehicleFactory {
    Car {
        brand: String,
        model: String,
        fuel_type: String,
    },
    Motorcycle {
        type_label: String,
        engine_capacity_cc: u32,
    },
    Truck {
        load_capacity_kg: u32,
        axles: u32,
    },
    Bus {
        seats: u32,
        route: String,
    },
}

impl VehicleFactory {
    /// Produce one fully-formed vehicle from the captured arguments.
    ///
    /// Pure construction: no validation, no caching, a fresh value per call.
    pub fn create(&self) -> Vehicle {
        match self {
            VehicleFactory::Car {
                brand,
                model,
                fuel_type,
            } => Vehicle::Car {
                brand: brand.clone(),
                model: model.clone(),
                fuel_type: fuel_type.clone(),
            },
            VehicleFactory::Motorcycle {
                type_label,
                engine_capacity_cc,
            } => Vehicle::Motorcycle {
                type_label: type_label.clone(),
                engine_capacity_cc: *engine_capacity_cc,
            },
            VehicleFactory::Truck {
                load_capacity_kg,
                axles,
            } => Vehicle::Truck {
                load_capacity_kg: *load_capacity_kg,
                axles: *axles,
            },
            VehicleFactory::Bus { seats, route } => Vehicle::Bus {
                seats: *seats,
                route: route.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_factory_reflects_its_arguments() {
        let factory = VehicleFactory::Car {
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            fuel_type: "gasoline".to_string(),
        };
        let vehicle = factory.create();
        assert_eq!(vehicle.describe(), "Car: Toyota Corolla, Fuel: gasoline");
    }

    #[test]
    fn repeated_creation_yields_fresh_equal_values() {
        let factory = VehicleFactory::Bus {
            seats: 40,
            route: "7A".to_string(),
        };
        let first = factory.create();
        let second = factory.create();
        assert_eq!(first, second);
        assert_eq!(first.describe(), "Bus: 40 seats, Route: 7A");
    }

    #[test]
    fn numeric_factories_carry_values_through() {
        let factory = VehicleFactory::Truck {
            load_capacity_kg: 5000,
            axles: 3,
        };
        assert_eq!(factory.create().describe(), "Truck: 5000 kg, Axles: 3");

        let factory = VehicleFactory::Motorcycle {
            type_label: "touring".to_string(),
            engine_capacity_cc: 1200,
        };
        assert_eq!(
            factory.create().describe(),
            "Motorcycle: touring, Engine: 1200cc"
        );
    }
}
