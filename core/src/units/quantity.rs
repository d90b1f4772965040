//! Dimensions of common physical quantities, derived from the seven SI base
//! vectors. Every constant here is evaluated at compile time, so a table
//! entry with an out-of-range exponent does not build.

use super::dimension::Unit;

pub const LENGTH: Unit = Unit::base(0);
pub const MASS: Unit = Unit::base(1);
pub const TIME: Unit = Unit::base(2);
pub const CURRENT: Unit = Unit::base(3);
pub const TEMPERATURE: Unit = Unit::base(4);
pub const SUBSTANCE: Unit = Unit::base(5);
pub const LUMINOSITY: Unit = Unit::base(6);

/// Dimensionless.
pub const SCALAR: Unit = Unit::ONE;

// Geometry & kinematics
pub const AREA: Unit = LENGTH.powi(2);
pub const VOLUME: Unit = LENGTH.powi(3);
pub const VELOCITY: Unit = LENGTH.per(TIME);
pub const ACCELERATION: Unit = VELOCITY.per(TIME);
pub const JERK: Unit = ACCELERATION.per(TIME);
pub const FREQUENCY: Unit = SCALAR.per(TIME);
pub const ANGULAR_VELOCITY: Unit = SCALAR.per(TIME);
pub const ANGULAR_ACCELERATION: Unit = ANGULAR_VELOCITY.per(TIME);

// Dynamics
pub const FORCE: Unit = MASS.times(LENGTH).times(TIME.powi(-2));
pub const MOMENTUM: Unit = MASS.times(VELOCITY);
pub const IMPULSE: Unit = FORCE.times(TIME);
/// Moment of a force (torque). Same dimension as energy.
pub const MOMENT: Unit = FORCE.times(LENGTH);
pub const ANGULAR_MOMENTUM: Unit = MOMENTUM.times(LENGTH);
pub const ENERGY: Unit = FORCE.times(LENGTH);
pub const POWER: Unit = ENERGY.per(TIME);
pub const ENERGY_DENSITY: Unit = ENERGY.per(VOLUME);
pub const POWER_DENSITY: Unit = POWER.per(VOLUME);

// Mass distribution
pub const DENSITY: Unit = MASS.per(VOLUME);
pub const LINEAR_DENSITY: Unit = MASS.per(LENGTH);
pub const SURFACE_DENSITY: Unit = MASS.per(AREA);
pub const SPECIFIC_VOLUME: Unit = VOLUME.per(MASS);
pub const SPECIFIC_ENERGY: Unit = ENERGY.per(MASS);

// Stress & strain
pub const PRESSURE: Unit = FORCE.per(AREA);
pub const STRESS: Unit = PRESSURE;
pub const STRAIN: Unit = SCALAR;
pub const STRAIN_RATE: Unit = STRAIN.per(TIME);
pub const COMPLIANCE: Unit = PRESSURE.invert();

// Thermodynamics
pub const HEAT_FLUX: Unit = POWER.per(AREA);
pub const THERMAL_CONDUCTIVITY: Unit = POWER.per(LENGTH.times(TEMPERATURE));
pub const HEAT_CAPACITY: Unit = ENERGY.per(TEMPERATURE);
pub const SPECIFIC_HEAT_CAPACITY: Unit = HEAT_CAPACITY.per(MASS);
pub const THERMAL_RESISTANCE: Unit = TEMPERATURE.per(POWER);
pub const THERMAL_DIFFUSIVITY: Unit = AREA.per(TIME);

// Fluid mechanics
pub const VOLUMETRIC_FLOW_RATE: Unit = VOLUME.per(TIME);
pub const MASS_FLOW_RATE: Unit = MASS.per(TIME);
pub const DYNAMIC_VISCOSITY: Unit = PRESSURE.times(TIME);
pub const KINEMATIC_VISCOSITY: Unit = AREA.per(TIME);

// Electricity & magnetism
pub const CHARGE: Unit = CURRENT.times(TIME);
pub const CHARGE_DENSITY: Unit = CHARGE.per(VOLUME);
pub const CURRENT_DENSITY: Unit = CURRENT.per(AREA);
pub const VOLTAGE: Unit = POWER.per(CURRENT);
pub const ELECTRIC_FIELD: Unit = VOLTAGE.per(LENGTH);
pub const RESISTANCE: Unit = VOLTAGE.per(CURRENT);
pub const CONDUCTANCE: Unit = RESISTANCE.invert();
pub const RESISTIVITY: Unit = RESISTANCE.times(LENGTH);
pub const CONDUCTIVITY: Unit = RESISTIVITY.invert();
pub const CAPACITANCE: Unit = CHARGE.per(VOLTAGE);
pub const INDUCTANCE: Unit = VOLTAGE.times(TIME).per(CURRENT);
pub const MAGNETIC_FLUX: Unit = VOLTAGE.times(TIME);
pub const MAGNETIC_FLUX_DENSITY: Unit = MAGNETIC_FLUX.per(AREA);
pub const MAGNETIC_FIELD_STRENGTH: Unit = CURRENT.per(LENGTH);
pub const MAGNETIC_PERMEABILITY: Unit = MAGNETIC_FLUX.per(CURRENT.times(LENGTH));
