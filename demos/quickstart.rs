use chrono::Utc;
use helioday::{JulianDate, ModifiedJulianDate, SolarLocation};
use qtty::Degrees;

fn main() {
    let now = Utc::now();
    let now_jd = JulianDate::from_calendar(&now);
    let now_mjd: ModifiedJulianDate = now_jd.into();

    println!("JD: {now_jd}");
    println!("MJD: {now_mjd}");
    println!("T: {}", now_jd.julian_centuries());

    // Greenwich
    let sun = SolarLocation::new(Degrees::new(51.4779), Degrees::new(-0.0015), now_jd);
    let events = sun.events();
    println!("solar noon: {} UTC", events.solar_noon);
    match (events.sunrise, events.sunset) {
        (Ok(rise), Ok(set)) => println!("sunrise: {rise} UTC, sunset: {set} UTC"),
        (Err(err), _) | (_, Err(err)) => println!("no sunrise/sunset: {err}"),
    }
    match sun.position() {
        Ok(pos) => println!(
            "elevation: {:.3}°, azimuth: {:.3}°",
            pos.apparent_elevation.value(),
            pos.azimuth.value()
        ),
        Err(err) => println!("position undefined: {err}"),
    }
}
