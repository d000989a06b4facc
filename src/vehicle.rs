//! The four vehicle variants and their shared capability surface.
//!
//! The variant set is closed and small, so the capability set
//! {drive, refuel, describe} is a tagged union rather than a trait hierarchy.
use serde::Serialize;

/// A vehicle created during the session.
///
/// Fields are immutable after construction; every message a variant can emit
/// is derived from its own fields alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Vehicle {
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

impl Vehicle {
    /// Stable one-line summary used for listings and creation confirmations.
    pub fn describe(&self) -> String {
        match self {
            Vehicle::Car {
                brand,
                model,
                fuel_type,
            } => format!("Car: {brand} {model}, Fuel: {fuel_type}"),
            Vehicle::Motorcycle {
                type_label,
                engine_capacity_cc,
            } => format!("Motorcycle: {type_label}, Engine: {engine_capacity_cc}cc"),
            Vehicle::Truck {
                load_capacity_kg,
                axles,
            } => format!("Truck: {load_capacity_kg} kg, Axles: {axles}"),
            Vehicle::Bus { seats, route } => format!("Bus: {seats} seats, Route: {route}"),
        }
    }

    /// Drive line naming the variant and its identifying attributes.
    pub fn drive(&self) -> String {
        match self {
            Vehicle::Car { brand, model, .. } => {
                format!("Car {brand} {model} is driving down the road.")
            }
            Vehicle::Motorcycle {
                type_label,
                engine_capacity_cc,
            } => format!("Motorcycle {type_label} with a {engine_capacity_cc}cc engine is riding."),
            Vehicle::Truck {
                load_capacity_kg,
                axles,
            } => format!("Truck rated for {load_capacity_kg} kg on {axles} axles is on the move."),
            Vehicle::Bus { seats, route } => {
                format!("Bus on route {route} is carrying {seats} passengers.")
            }
        }
    }

    /// Refuel line. Cars name their fuel type; trucks always take diesel and
    /// buses always take gas.
    pub fn refuel(&self) -> String {
        match self {
            Vehicle::Car {
                brand,
                model,
                fuel_type,
            } => format!("Car {brand} {model} is refueling ({fuel_type})."),
            Vehicle::Motorcycle { type_label, .. } => {
                format!("Motorcycle {type_label} is refueling.")
            }
            Vehicle::Truck { .. } => "The truck is refueling with diesel.".to_string(),
            Vehicle::Bus { .. } => "The bus is refueling with gas.".to_string(),
        }
    }
}
