//! Costing models and their tunable options.
//!
//! Per-mode option sets are built by composition: the shared field groups
//! ([`CommonCostingOptions`], [`MotorizedCostingOptions`]) are flattened into
//! each mode's struct, so a truck carries every motorized field plus its own
//! dimensions. All values are interpreted by the service; unset fields fall
//! back to the service defaults documented on each field.

use serde::{Deserialize, Serialize};

/// Named travel-mode profile used to cost a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Costing {
    /// Driving by car, obeying automobile access and turn restrictions.
    Auto,
    /// Cycling, preferring cycleways and roads with bicycle lanes.
    Bicycle,
    /// Bus routes; auto costing plus bus access checks.
    Bus,
    /// Pedestrian plus bicycle, switching at bike share stations.
    Bikeshare,
    /// Trucks; auto costing plus access, dimension and weight limits.
    Truck,
    /// Taxi routes; auto costing favouring taxi lanes.
    Taxi,
    /// Motor scooter or moped.
    MotorScooter,
    /// Motorcycle.
    Motorcycle,
    /// Pedestrian and transit.
    Multimodal,
    /// Walking.
    Pedestrian,
}

impl Costing {
    /// Wire name of the costing model.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Bicycle => "bicycle",
            Self::Bus => "bus",
            Self::Bikeshare => "bikeshare",
            Self::Truck => "truck",
            Self::Taxi => "taxi",
            Self::MotorScooter => "motor_scooter",
            Self::Motorcycle => "motorcycle",
            Self::Multimodal => "multimodal",
            Self::Pedestrian => "pedestrian",
        }
    }
}

impl std::fmt::Display for Costing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options shared by every vehicle costing model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonCostingOptions {
    /// Penalty in seconds when transitioning between roads without a common
    /// name (default 5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maneuver_penalty: Option<u32>,
    /// Cost in seconds for gates with undefined or private access
    /// (default 30).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_cost: Option<u32>,
    /// Penalty in seconds for gates without access information (default 300).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_penalty: Option<u32>,
    /// Cost in seconds for crossing an international border (default 600).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_crossing_cost: Option<u32>,
    /// Penalty for crossing an international border (default 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_crossing_penalty: Option<u32>,
    /// Penalty for transitioning onto a generic service road.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_penalty: Option<u32>,
    /// Use purely distance-based costing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortest: Option<bool>,
}

/// Options shared by motorized costing models.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotorizedCostingOptions {
    /// Fields shared with every vehicle.
    #[serde(flatten)]
    pub common: CommonCostingOptions,
    /// Penalty in seconds for private gates or bollards (default 450).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_access_penalty: Option<u32>,
    /// Cost in seconds for toll booths (default 15).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toll_booth_cost: Option<u32>,
    /// Penalty for toll booths (default 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toll_booth_penalty: Option<u32>,
    /// Cost in seconds for boarding a ferry (default 300).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ferry_cost: Option<u32>,
    /// Willingness to take ferries, 0 to 1 (default 0.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_ferry: Option<f32>,
    /// Willingness to take highways, 0 to 1 (default 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_highways: Option<f32>,
    /// Willingness to take toll roads, 0 to 1 (default 0.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_tolls: Option<f32>,
    /// Willingness to take living streets, 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_living_streets: Option<f32>,
    /// Willingness to take track roads, 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_tracks: Option<f32>,
    /// Cost multiplier for generic service roads (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_factor: Option<f32>,
    /// Top speed in KPH.
    ///
    /// The accepted range depends on the mode: 10 to 252 for cars, 20 to 120
    /// for motor scooters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_speed: Option<f32>,
    /// Ignore live traffic closures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_closures: Option<bool>,
    /// Cost multiplier for closed edges, 1.0 to 10.0 (default 9.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closure_factor: Option<f32>,
    /// Vehicle height in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Vehicle width in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Only allow unpaved roads at the start and end of the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_unpaved: Option<bool>,
    /// Avoid cash-only tolls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_cash_only_tolls: Option<bool>,
    /// Include HOV roads with a 2-occupant requirement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_hov2: Option<bool>,
    /// Include HOV roads with a 3-occupant requirement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_hov3: Option<bool>,
    /// Include tolled HOV roads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_hot: Option<bool>,
}

/// Options for [`Costing::Auto`].
pub type AutoCostingOptions = MotorizedCostingOptions;
/// Options for [`Costing::Taxi`].
pub type TaxiCostingOptions = MotorizedCostingOptions;
/// Options for [`Costing::Bus`].
pub type BusCostingOptions = MotorizedCostingOptions;

/// Options for [`Costing::Truck`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TruckCostingOptions {
    /// Fields shared with every motorized mode.
    #[serde(flatten)]
    pub motorized: MotorizedCostingOptions,
    /// Length in meters (default 21.64).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f32>,
    /// Weight in metric tons (default 21.77).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    /// Axle load in metric tons (default 9.07).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axle_load: Option<f32>,
    /// Carrying hazardous materials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazmat: Option<bool>,
}

/// Options for [`Costing::MotorScooter`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotorScooterCostingOptions {
    /// Fields shared with every motorized mode.
    #[serde(flatten)]
    pub motorized: MotorizedCostingOptions,
    /// Propensity to use primary roads, 0 to 1 (default 0.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_primary: Option<f32>,
    /// Desire to tackle hills, 0 to 1 (default 0.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_hills: Option<f32>,
}

/// Options for [`Costing::Motorcycle`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotorcycleCostingOptions {
    /// Fields shared with every motorized mode.
    #[serde(flatten)]
    pub motorized: MotorizedCostingOptions,
    /// Desire for trails, tracks and bad surfaces, 0 to 1 (default 0.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_trails: Option<f32>,
}

/// Bicycle kinds understood by [`Costing::Bicycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BicycleType {
    /// Narrow tires, built for speed on paved surfaces.
    Road,
    /// City or casual riding on good surfaces.
    Hybrid,
    /// Alias of `Hybrid`.
    City,
    /// Cyclo-cross, wider tires for rougher surfaces.
    Cross,
    /// Mountain bike.
    Mountain,
}

/// Options for [`Costing::Bicycle`] and [`Costing::Bikeshare`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BicycleCostingOptions {
    /// Fields shared with every vehicle.
    #[serde(flatten)]
    pub common: CommonCostingOptions,
    /// Kind of bicycle (default hybrid).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bicycle_type: Option<BicycleType>,
    /// Average speed on smooth, flat roads in KPH.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycling_speed: Option<f32>,
    /// Propensity to ride on roads alongside traffic, 0 to 1 (default 0.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_roads: Option<f32>,
    /// Desire to tackle hills, 0 to 1 (default 0.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_hills: Option<f32>,
    /// Willingness to take ferries, 0 to 1 (default 0.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_ferry: Option<f32>,
    /// Willingness to take living streets, 0 to 1 (default 0.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_living_streets: Option<f32>,
    /// Avoidance of poor surfaces, 0 to 1 (default 0.25).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_bad_surfaces: Option<f32>,
    /// Seconds to return a shared bike (default 120).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bss_return_cost: Option<u32>,
    /// Effort penalty for returning a shared bike.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bss_return_penalty: Option<u32>,
}

/// Options for [`Costing::Pedestrian`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PedestrianCostingOptions {
    /// Walking speed in KPH, 0.5 to 25 (default 5.1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walking_speed: Option<f32>,
    /// Cost multiplier for footways (default 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walkway_factor: Option<f32>,
    /// Cost multiplier for roads with sidewalks (default 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidewalk_factor: Option<f32>,
    /// Cost multiplier for alleys (default 2.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alley_factor: Option<f32>,
    /// Cost multiplier for driveways (default 5.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driveway_factor: Option<f32>,
    /// Penalty in seconds for each transition onto steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_penalty: Option<u32>,
    /// Willingness to take ferries, 0 to 1 (default 0.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_ferry: Option<f32>,
    /// Willingness to take living streets, 0 to 1 (default 0.6).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_living_streets: Option<f32>,
    /// Willingness to take track roads, 0 to 1 (default 0.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_tracks: Option<f32>,
    /// Desire to tackle hills, 0 to 1 (default 0.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_hills: Option<f32>,
    /// Penalty for transitioning onto a generic service road (default 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_penalty: Option<u32>,
    /// Cost multiplier for generic service roads (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_factor: Option<f32>,
    /// Maximum SAC hiking scale difficulty, 0 to 6 (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hiking_difficulty: Option<u8>,
    /// Seconds to rent a shared bike (default 120).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bss_rent_cost: Option<u32>,
    /// Effort penalty for renting a shared bike.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bss_rent_penalty: Option<u32>,
    /// Use purely distance-based costing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortest: Option<bool>,
}

/// Whether a transit filter keeps or drops the listed identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterAction {
    /// Use only the listed identifiers.
    Include,
    /// Avoid the listed identifiers.
    Exclude,
}

/// A list of Onestop IDs and what to do with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitFilter {
    /// Onestop IDs such as `o-9q9-bart`.
    pub ids: Vec<String>,
    /// Filter action.
    pub action: FilterAction,
}

/// Transit filters keyed by the kind of entity they match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitFilters {
    /// Stop filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stops: Option<TransitFilter>,
    /// Route filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<TransitFilter>,
    /// Operator filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operators: Option<TransitFilter>,
}

/// Transit preferences used by [`Costing::Multimodal`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitCostingOptions {
    /// Desire to use buses, 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_bus: Option<f32>,
    /// Desire to use rail, subway and metro, 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_rail: Option<f32>,
    /// Comfort with transfers, 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_transfers: Option<f32>,
    /// Maximum walk in meters at the start or end (default 2145).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_start_end_max_distance: Option<u32>,
    /// Maximum walk in meters between transfers (default 800).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_transfer_max_distance: Option<u32>,
    /// Stop, route and operator filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<TransitFilters>,
}

/// Per-mode costing options; only the entry matching the request's costing
/// model is consulted by the service.
///
/// # Examples
///
/// ```
/// use valhalla_core::CostingOptions;
/// use valhalla_core::costing::TruckCostingOptions;
///
/// let mut truck = TruckCostingOptions::default();
/// truck.motorized.common.shortest = Some(true);
/// truck.hazmat = Some(true);
/// let options = CostingOptions {
///     truck: Some(truck),
///     ..CostingOptions::default()
/// };
/// let json = serde_json::to_value(&options).unwrap();
/// assert_eq!(json["truck"]["shortest"], true);
/// assert_eq!(json["truck"]["hazmat"], true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostingOptions {
    /// Auto options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto: Option<AutoCostingOptions>,
    /// Taxi options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxi: Option<TaxiCostingOptions>,
    /// Bus options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus: Option<BusCostingOptions>,
    /// Truck options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truck: Option<TruckCostingOptions>,
    /// Bicycle options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bicycle: Option<BicycleCostingOptions>,
    /// Motor scooter options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motor_scooter: Option<MotorScooterCostingOptions>,
    /// Motorcycle options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motorcycle: Option<MotorcycleCostingOptions>,
    /// Pedestrian options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pedestrian: Option<PedestrianCostingOptions>,
    /// Transit options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit: Option<TransitCostingOptions>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Costing::Auto, "auto")]
    #[case(Costing::MotorScooter, "motor_scooter")]
    #[case(Costing::Bikeshare, "bikeshare")]
    #[case(Costing::Multimodal, "multimodal")]
    fn costing_serialises_to_wire_name(#[case] costing: Costing, #[case] expected: &str) {
        assert_eq!(serde_json::to_value(costing).expect("serialise"), json!(expected));
        assert_eq!(costing.as_str(), expected);
        assert_eq!(costing.to_string(), expected);
    }

    #[rstest]
    fn empty_options_serialise_to_empty_object() {
        let value = serde_json::to_value(CostingOptions::default()).expect("serialise");
        assert_eq!(value, json!({}));
    }

    #[rstest]
    fn truck_flattens_motorized_and_common_fields() {
        let truck = TruckCostingOptions {
            motorized: MotorizedCostingOptions {
                common: CommonCostingOptions {
                    maneuver_penalty: Some(0),
                    ..CommonCostingOptions::default()
                },
                use_tolls: Some(0.0),
                ..MotorizedCostingOptions::default()
            },
            weight: Some(30.5),
            ..TruckCostingOptions::default()
        };

        let value = serde_json::to_value(&truck).expect("serialise");

        assert_eq!(
            value,
            json!({ "maneuver_penalty": 0, "use_tolls": 0.0, "weight": 30.5 })
        );
    }

    #[rstest]
    fn flattened_options_deserialise_back_into_groups() {
        let options: CostingOptions = serde_json::from_value(json!({
            "motorcycle": { "use_trails": 0.5, "use_highways": 1.0, "gate_cost": 10 },
            "bicycle": { "bicycle_type": "Mountain", "use_hills": 0.25 },
        }))
        .expect("deserialise");

        let motorcycle = options.motorcycle.expect("motorcycle options");
        assert_eq!(motorcycle.use_trails, Some(0.5));
        assert_eq!(motorcycle.motorized.use_highways, Some(1.0));
        assert_eq!(motorcycle.motorized.common.gate_cost, Some(10));
        let bicycle = options.bicycle.expect("bicycle options");
        assert_eq!(bicycle.bicycle_type, Some(BicycleType::Mountain));
        assert_eq!(bicycle.use_hills, Some(0.25));
    }

    #[rstest]
    fn transit_filters_use_onestop_layout() {
        let transit = TransitCostingOptions {
            filters: Some(TransitFilters {
                operators: Some(TransitFilter {
                    ids: vec!["o-9q9-bart".to_owned()],
                    action: FilterAction::Exclude,
                }),
                ..TransitFilters::default()
            }),
            ..TransitCostingOptions::default()
        };

        let value = serde_json::to_value(&transit).expect("serialise");

        assert_eq!(
            value,
            json!({
                "filters": {
                    "operators": { "ids": ["o-9q9-bart"], "action": "exclude" }
                }
            })
        );
    }
}
