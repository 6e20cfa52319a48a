use mining_profit_calculator::units::{convert_hashrate, convert_power, HashrateUnit, PowerUnit};

#[test]
fn eh_to_th() {
    let th = convert_hashrate(
        600.0,
        HashrateUnit::ExaHashPerSecond,
        HashrateUnit::TeraHashPerSecond,
    );
    assert!((th - 600_000_000.0).abs() < 1e-6);
}

#[test]
fn hashrate_roundtrip() {
    let v = 123.456;
    let back = convert_hashrate(
        convert_hashrate(
            v,
            HashrateUnit::PetaHashPerSecond,
            HashrateUnit::TeraHashPerSecond,
        ),
        HashrateUnit::TeraHashPerSecond,
        HashrateUnit::PetaHashPerSecond,
    );
    assert!((back - v).abs() < 1e-9);
}

#[test]
fn kilowatt_to_watt() {
    let w = convert_power(3.25, PowerUnit::Kilowatt, PowerUnit::Watt);
    assert!((w - 3250.0).abs() < 1e-9);
}
