//! U.S. state lookup: display names and approximate geographic centroids.

/// One of the 50 states.
#[derive(Debug, Clone, Copy)]
pub struct UsState {
    pub code: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

const fn st(code: &'static str, name: &'static str, lat: f64, lon: f64) -> UsState {
    UsState { code, name, lat, lon }
}

pub const STATES: [UsState; 50] = [
    st("AL", "Alabama", 32.318231, -86.902298),
    st("AK", "Alaska", 63.588753, -154.493062),
    st("AZ", "Arizona", 34.048928, -111.093731),
    st("AR", "Arkansas", 35.201050, -91.831833),
    st("CA", "California", 36.778261, -119.417932),
    st("CO", "Colorado", 39.550051, -105.782067),
    st("CT", "Connecticut", 41.603221, -73.087749),
    st("DE", "Delaware", 38.910832, -75.527670),
    st("FL", "Florida", 27.664827, -81.515754),
    st("GA", "Georgia", 32.157435, -82.907123),
    st("HI", "Hawaii", 19.898682, -155.665857),
    st("ID", "Idaho", 44.068202, -114.742041),
    st("IL", "Illinois", 40.633125, -89.398528),
    st("IN", "Indiana", 40.551217, -85.602364),
    st("IA", "Iowa", 41.878003, -93.097702),
    st("KS", "Kansas", 39.011902, -98.484246),
    st("KY", "Kentucky", 37.839333, -84.270018),
    st("LA", "Louisiana", 31.244823, -92.145024),
    st("ME", "Maine", 45.253783, -69.445469),
    st("MD", "Maryland", 39.045755, -76.641271),
    st("MA", "Massachusetts", 42.407211, -71.382437),
    st("MI", "Michigan", 44.314844, -85.602364),
    st("MN", "Minnesota", 46.729553, -94.685900),
    st("MS", "Mississippi", 32.354668, -89.398528),
    st("MO", "Missouri", 37.964253, -91.831833),
    st("MT", "Montana", 46.879682, -110.362566),
    st("NE", "Nebraska", 41.492537, -99.901813),
    st("NV", "Nevada", 38.802610, -116.419389),
    st("NH", "New Hampshire", 43.193852, -71.572395),
    st("NJ", "New Jersey", 40.058324, -74.405661),
    st("NM", "New Mexico", 34.972730, -105.032363),
    st("NY", "New York", 43.299428, -74.217933),
    st("NC", "North Carolina", 35.759573, -79.019300),
    st("ND", "North Dakota", 47.551493, -101.002012),
    st("OH", "Ohio", 40.417287, -82.907123),
    st("OK", "Oklahoma", 35.007752, -97.092877),
    st("OR", "Oregon", 43.804133, -120.554201),
    st("PA", "Pennsylvania", 41.203322, -77.194525),
    st("RI", "Rhode Island", 41.580095, -71.477429),
    st("SC", "South Carolina", 33.836081, -81.163725),
    st("SD", "South Dakota", 43.969515, -99.901813),
    st("TN", "Tennessee", 35.517491, -86.580447),
    st("TX", "Texas", 31.968599, -99.901813),
    st("UT", "Utah", 39.320980, -111.093731),
    st("VT", "Vermont", 44.558803, -72.577841),
    st("VA", "Virginia", 37.431573, -78.656894),
    st("WA", "Washington", 47.751074, -120.740139),
    st("WV", "West Virginia", 38.597626, -80.454903),
    st("WI", "Wisconsin", 43.784440, -88.787868),
    st("WY", "Wyoming", 43.075968, -107.290284),
];

/// Look up a state by its exact two-letter code.
pub fn lookup(code: &str) -> Option<&'static UsState> {
    STATES.iter().find(|s| s.code == code)
}

/// Full display name for a code, `None` for anything outside the 50 states.
pub fn state_name(code: &str) -> Option<&'static str> {
    lookup(code).map(|s| s.name)
}

/// Plot position `[x, y]` (degrees lon/lat) for a state marker.
///
/// Alaska and Hawaii are scaled and moved into insets southwest of the
/// contiguous states.
pub fn map_position(code: &str) -> Option<[f64; 2]> {
    let s = lookup(code)?;
    let pos = match s.code {
        "AK" => [-117.0 + (s.lon + 154.5) * 0.35, 27.5 + (s.lat - 63.6) * 0.35],
        "HI" => [-105.5 + (s.lon + 155.7), 25.0 + (s.lat - 19.9)],
        _ => [s.lon, s.lat],
    };
    Some(pos)
}
