//! Static table of known locations.

/// Known locations and their `(latitude, longitude)`, lowercased.
///
/// Order matters: partial matches resolve to the first matching entry.
pub(super) const LOCATIONS: &[(&str, f64, f64)] = &[
    // North
    ("borrowdale", -17.7450, 31.0850),
    ("borrowdale brook", -17.7400, 31.0900),
    ("borrowdale west", -17.7500, 31.0700),
    ("glen lorne", -17.7300, 31.1100),
    ("hogerty hill", -17.7200, 31.1000),
    ("mt pleasant", -17.7700, 31.0500),
    ("mount pleasant", -17.7700, 31.0500),
    ("avondale", -17.7900, 31.0300),
    ("avondale west", -17.7950, 31.0200),
    ("highlands", -17.8100, 31.0600),
    ("marlborough", -17.7600, 31.0100),
    ("pomona", -17.7500, 31.0300),
    ("greystone park", -17.7650, 31.0950),
    ("helensvale", -17.7550, 31.0800),
    ("mandara", -17.7600, 31.1050),
    ("chisipite", -17.7750, 31.1000),
    ("colne valley", -17.7350, 31.0750),
    ("shawasha hills", -17.7400, 31.0600),
    ("the grange", -17.7800, 31.0850),
    ("vainona", -17.7650, 31.0650),
    ("quinnington", -17.7550, 31.0550),

    // East
    ("greendale", -17.8200, 31.1000),
    ("eastlea", -17.8300, 31.0800),
    ("braeside", -17.8150, 31.0900),
    ("alexandra park", -17.8050, 31.0750),
    ("msasa", -17.8100, 31.1200),
    ("msasa park", -17.8050, 31.1150),
    ("ruwa", -17.8900, 31.2500),
    ("zimre park", -17.8700, 31.2000),
    ("sunway city", -17.8800, 31.1800),
    ("damofalls", -17.8600, 31.1500),
    ("epworth", -17.8900, 31.1400),
    ("hatcliffe", -17.7100, 31.0700),
    ("borrowdale brooke", -17.7400, 31.0900),

    // South
    ("hatfield", -17.8600, 31.0500),
    ("southerton", -17.8700, 31.0300),
    ("waterfalls", -17.8800, 31.0100),
    ("glen view", -17.9100, 31.0000),
    ("glenview", -17.9100, 31.0000),
    ("highfield", -17.8800, 30.9800),
    ("mbare", -17.8600, 31.0350),
    ("ardbennie", -17.8750, 31.0200),
    ("willowvale", -17.8650, 30.9900),
    ("workington", -17.8550, 31.0100),
    ("graniteside", -17.8400, 31.0600),
    ("prospect", -17.8500, 31.0450),
    ("queensdale", -17.8550, 31.0700),

    // West
    ("westgate", -17.8200, 30.9600),
    ("mabelreign", -17.8000, 30.9700),
    ("milton park", -17.8200, 31.0200),
    ("belvedere", -17.8100, 31.0100),
    ("emerald hill", -17.8050, 31.0000),
    ("meyrick park", -17.8100, 30.9800),
    ("kensington", -17.8150, 30.9900),
    ("ashdown park", -17.7950, 30.9600),
    ("bluff hill", -17.7900, 30.9500),
    ("sentosa", -17.7850, 30.9400),
    ("tynwald", -17.8300, 30.9100),
    ("marimba park", -17.8400, 30.9300),
    ("warren park", -17.8500, 30.9500),
    ("kuwadzana", -17.8400, 30.8900),
    ("dzivarasekwa", -17.8200, 30.8700),
    ("crowborough", -17.8350, 30.9700),

    // Central
    ("city centre", -17.8292, 31.0522),
    ("cbd", -17.8292, 31.0522),
    ("harare cbd", -17.8292, 31.0522),
    ("avenues", -17.8200, 31.0450),
    ("the avenues", -17.8200, 31.0450),
    ("newlands", -17.8000, 31.0350),
    ("kopje", -17.8350, 31.0480),
    ("harare", -17.8292, 31.0522),

    // Additional suburbs
    ("gunhill", -17.7950, 31.0700),
    ("ballantyne park", -17.7850, 31.0550),
    ("strathaven", -17.8000, 31.0500),
    ("logan park", -17.7900, 31.0450),
    ("monavale", -17.7800, 31.0200),
    ("acturus", -17.7600, 31.1300),
    ("greencroft", -17.8000, 30.9950),
    ("ridgeview", -17.7900, 30.9850),
    ("adylinn", -17.7750, 30.9800),
    ("amby", -17.8050, 31.0550),
    ("belgravia", -17.8150, 31.0350),
    ("kambanji", -17.7500, 31.1200),
    ("chishawasha", -17.7200, 31.1400),
    ("domboshawa", -17.6200, 31.1500),
    ("norton", -17.8800, 30.7000),
    ("chitungwiza", -18.0100, 31.0800),

    // Other cities
    ("bulawayo", -20.1500, 28.5800),
    ("mutare", -18.9700, 32.6700),
    ("gweru", -19.4500, 29.8200),
    ("masvingo", -20.0700, 30.8300),
    ("victoria falls", -17.9300, 25.8300),
    ("kariba", -16.5200, 28.8000),
    ("nyanga", -18.2200, 32.7500),
];
