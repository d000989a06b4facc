//! Menu controller: the prompt loop, field collection, and the session list.
//!
//! The loop is written against generic reader/writer handles so unit tests can
//! drive a whole session from a string script and inspect the transcript.
use crate::factory::VehicleFactory;
use crate::vehicle::Vehicle;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Tuning for one interactive session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Re-prompt on malformed integers instead of aborting the session.
    pub lenient_numbers: bool,
    /// Render the list menu option as a JSON array instead of prose.
    pub json_listing: bool,
}

/// Append-only collection of every vehicle created during one session.
///
/// Owned by the loop; insertion order is display order and nothing is ever
/// removed.
#[derive(Debug, Default)]
pub struct Garage {
    vehicles: Vec<Vehicle>,
}

impl Garage {
    pub fn add(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }
}

/// Run one interactive session to completion.
///
/// Returns the final garage on a menu-driven exit or end of input. In strict
/// mode a malformed integer aborts the session with an error before anything
/// is appended for that selection.
pub fn run(
    input: &mut impl BufRead,
    output: &mut impl Write,
    options: SessionOptions,
) -> Result<Garage> {
    let mut garage = Garage::default();

    loop {
        print_menu(output)?;
        let Some(choice) = read_line(input)? else {
            farewell(output)?;
            break;
        };

        let factory = match choice.as_str() {
            "1" => collect_car(input, output)?,
            "2" => collect_motorcycle(input, output, options)?,
            "3" => collect_truck(input, output, options)?,
            "4" => collect_bus(input, output, options)?,
            "5" => {
                list_vehicles(output, &garage, options.json_listing)?;
                continue;
            }
            "6" => {
                farewell(output)?;
                break;
            }
            _ => {
                writeln!(output, "Invalid choice.")?;
                continue;
            }
        };

        // Field collection hit end of input before completing.
        let Some(factory) = factory else {
            farewell(output)?;
            break;
        };

        let vehicle = factory.create();
        writeln!(output, "Created: {}", vehicle.describe())?;
        writeln!(output, "{}", vehicle.drive())?;
        writeln!(output, "{}", vehicle.refuel())?;
        tracing::debug!(summary = %vehicle.describe(), "vehicle created");
        garage.add(vehicle);
    }

    tracing::debug!(vehicles = garage.len(), "session finished");
    Ok(garage)
}

fn print_menu(output: &mut impl Write) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "Menu:")?;
    writeln!(output, "1. Create a car")?;
    writeln!(output, "2. Create a motorcycle")?;
    writeln!(output, "3. Create a truck")?;
    writeln!(output, "4. Create a bus")?;
    writeln!(output, "5. List all vehicles")?;
    writeln!(output, "6. Exit")?;
    write!(output, "Choose an action: ")?;
    output.flush().context("flush menu prompt")?;
    Ok(())
}

fn farewell(output: &mut impl Write) -> Result<()> {
    writeln!(output, "Exiting...")?;
    Ok(())
}

fn list_vehicles(output: &mut impl Write, garage: &Garage, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(garage.vehicles()).context("render vehicle listing")?;
        writeln!(output, "{rendered}")?;
        return Ok(());
    }
    if garage.is_empty() {
        writeln!(output, "No vehicles created yet.")?;
        return Ok(());
    }
    for vehicle in garage.vehicles() {
        writeln!(output, "{}", vehicle.describe())?;
    }
    Ok(())
}

fn collect_car(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<VehicleFactory>> {
    let Some(brand) = prompt_text(input, output, "Brand: ")? else {
        return Ok(None);
    };
    let Some(model) = prompt_text(input, output, "Model: ")? else {
        return Ok(None);
    };
    let Some(fuel_type) = prompt_text(input, output, "Fuel type: ")? else {
        return Ok(None);
    };
    Ok(Some(VehicleFactory::Car {
        brand,
        model,
        fuel_type,
    }))
}

fn collect_motorcycle(
    input: &mut impl BufRead,
    output: &mut impl Write,
    options: SessionOptions,
) -> Result<Option<VehicleFactory>> {
    let Some(type_label) = prompt_text(input, output, "Motorcycle type (sport/touring): ")? else {
        return Ok(None);
    };
    let Some(engine_capacity_cc) =
        prompt_integer(input, output, "Engine capacity (cc): ", options)?
    else {
        return Ok(None);
    };
    Ok(Some(VehicleFactory::Motorcycle {
        type_label,
        engine_capacity_cc,
    }))
}

fn collect_truck(
    input: &mut impl BufRead,
    output: &mut impl Write,
    options: SessionOptions,
) -> Result<Option<VehicleFactory>> {
    let Some(load_capacity_kg) = prompt_integer(input, output, "Load capacity (kg): ", options)?
    else {
        return Ok(None);
    };
    let Some(axles) = prompt_integer(input, output, "Axle count: ", options)? else {
        return Ok(None);
    };
    Ok(Some(VehicleFactory::Truck {
        load_capacity_kg,
        axles,
    }))
}

fn collect_bus(
    input: &mut impl BufRead,
    output: &mut impl Write,
    options: SessionOptions,
) -> Result<Option<VehicleFactory>> {
    let Some(seats) = prompt_integer(input, output, "Seat count: ", options)? else {
        return Ok(None);
    };
    let Some(route) = prompt_text(input, output, "Route: ")? else {
        return Ok(None);
    };
    Ok(Some(VehicleFactory::Bus { seats, route }))
}

/// Prompt for one line of free-form text. Empty input is stored as-is.
/// `None` means the input stream ended.
fn prompt_text(
    input: &mut impl BufRead,
    output: &mut impl Write,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush().context("flush field prompt")?;
    read_line(input)
}

/// Prompt for a non-negative integer field.
///
/// Strict mode propagates a parse failure as an error, aborting the session.
/// Lenient mode reports the bad value and asks again.
fn prompt_integer(
    input: &mut impl BufRead,
    output: &mut impl Write,
    label: &str,
    options: SessionOptions,
) -> Result<Option<u32>> {
    loop {
        let Some(text) = prompt_text(input, output, label)? else {
            return Ok(None);
        };
        let trimmed = text.trim();
        match trimmed.parse::<u32>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) if options.lenient_numbers => {
                writeln!(output, "Not a valid integer: {trimmed:?}. Try again.")?;
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("invalid integer {trimmed:?} for {}", label.trim()));
            }
        }
    }
}

/// Read one line, stripping the trailing newline. `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("read input line")?;
    if read == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
