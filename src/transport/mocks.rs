//!
//! mock network generation functions
//!
use super::config::NetworkConfig;

/// Two supply nodes (capacity 10 and 5) feeding one demand node through a single
/// transshipment node.
///
/// ```text
/// S1 --1--\
///          T --1--> D
/// S2 --2--/
/// ```
///
/// With `requirement = 12` the optimal cost is 26, with a requirement above 15 it is infeasible.
pub fn mock_small_network(requirement: f64) -> NetworkConfig {
    NetworkConfig::new()
        .supply("S1", 10.0)
        .supply("S2", 5.0)
        .transshipment("T")
        .demand("D", requirement)
        .arc("S1", "T", 1.0)
        .arc("S2", "T", 2.0)
        .arc("T", "D", 1.0)
}

/// TechHardware Corp. distribution network:
/// 7 plants (I), 4 warehouses (J), 10 customers (K).
///
/// Optimal cost is 538650.
pub fn mock_tech_hardware_network() -> NetworkConfig {
    let plants = [
        ("I1", 300.0),
        ("I2", 400.0),
        ("I3", 360.0),
        ("I4", 200.0),
        ("I5", 380.0),
        ("I6", 230.0),
        ("I7", 400.0),
    ];
    let warehouses = ["J1", "J2", "J3", "J4"];
    let customers = [
        ("K1", 120.0),
        ("K2", 100.0),
        ("K3", 80.0),
        ("K4", 100.0),
        ("K5", 140.0),
        ("K6", 200.0),
        ("K7", 60.0),
        ("K8", 90.0),
        ("K9", 90.0),
        ("K10", 100.0),
    ];
    let arcs = [
        // plant -> warehouse, plant -> customer
        ("I1", "J1", 230.0),
        ("I1", "J2", 300.0),
        ("I1", "K1", 290.0),
        ("I2", "J1", 250.0),
        ("I2", "J4", 280.0),
        ("I3", "J2", 325.0),
        ("I3", "J3", 315.0),
        ("I4", "J1", 190.0),
        ("I4", "J2", 225.0),
        ("I4", "J4", 325.0),
        ("I5", "J3", 305.0),
        ("I6", "J3", 360.0),
        ("I6", "J4", 310.0),
        ("I7", "J1", 270.0),
        ("I7", "J2", 340.0),
        ("I7", "K1", 190.0),
        // warehouse -> customer
        ("J1", "K1", 350.0),
        ("J1", "K4", 290.0),
        ("J1", "K5", 310.0),
        ("J1", "K7", 250.0),
        ("J1", "K8", 320.0),
        ("J1", "K10", 370.0),
        ("J2", "K4", 330.0),
        ("J2", "K6", 260.0),
        ("J2", "K7", 280.0),
        ("J2", "K10", 335.0),
        ("J3", "K1", 370.0),
        ("J3", "K2", 190.0),
        ("J3", "K3", 305.0),
        ("J3", "K5", 330.0),
        ("J3", "K9", 260.0),
        ("J4", "K1", 190.0),
        ("J4", "K5", 305.0),
        ("J4", "K6", 345.0),
    ];

    let mut config = NetworkConfig::new();
    for (id, capacity) in plants {
        config = config.supply(id, capacity);
    }
    for id in warehouses {
        config = config.transshipment(id);
    }
    for (id, requirement) in customers {
        config = config.demand(id, requirement);
    }
    for (origin, destination, cost) in arcs {
        config = config.arc(origin, destination, cost);
    }
    config
}

/// TechHardware network with every customer demand raised by 25% (truncated),
/// and plant I3 capacity cut to 120 then restored to 360 by an override.
///
/// Optimal cost is 678995.
pub fn mock_tech_hardware_modified_network() -> NetworkConfig {
    let mut config = mock_tech_hardware_network()
        .with_demand_scale(1.25)
        .with_capacity_override("I3", 360.0);
    config.capacities.insert("I3".to_string(), 120.0);
    config
}
