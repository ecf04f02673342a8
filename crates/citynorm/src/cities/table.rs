//! Compiled-in alias table: canonical city name -> known alternative names.
//!
//! Canonical names are lowercase and space-separated. Aliases cover local
//! spellings, English and Italian exonyms, colloquial nicknames, and common
//! abbreviations. Should this data set grow beyond a few hundred entries it
//! should move to a proper data store; for now a literal keeps lookups free
//! of I/O and the table reviewable in one screen.

pub(crate) const CITY_ALIASES: &[(&str, &[&str])] = &[
    // United States
    ("new york", &["nyc", "new york city", "manhattan", "ny"]),
    ("los angeles", &["la", "los angeles city"]),
    // Italy (local and English names)
    ("rome", &["roma", "rome", "eternal city"]),
    ("milan", &["milano", "milan", "mi"]),
    ("naples", &["napoli", "naples", "na"]),
    ("turin", &["torino", "turin", "to"]),
    ("palermo", &["palermo", "pa"]),
    ("genoa", &["genova", "genoa", "ge"]),
    ("bologna", &["bologna", "bo"]),
    ("florence", &["firenze", "florence", "fi"]),
    ("bari", &["bari", "ba"]),
    ("catania", &["catania", "ct"]),
    ("venice", &["venezia", "venice", "ve"]),
    ("verona", &["verona", "vr"]),
    ("messina", &["messina", "me"]),
    ("padua", &["padova", "padua", "pd"]),
    ("trieste", &["trieste", "ts"]),
    ("lecce", &["lecce", "le"]),
    (
        "galatina",
        &["galatina", "la città del pasticciotto", "galatown", "gala"],
    ),
    // Major European cities (local, English, and Italian names)
    ("london", &["london", "greater london", "londra", "ldn"]),
    ("paris", &["paris", "city of light", "parigi"]),
    ("berlin", &["berlin", "berlino"]),
    ("madrid", &["madrid"]),
    ("barcelona", &["barcelona", "barcellona", "bcn"]),
    ("amsterdam", &["amsterdam", "ams"]),
    ("vienna", &["wien", "vienna"]),
    ("prague", &["praha", "prague", "praga"]),
    ("warsaw", &["warszawa", "warsaw", "varsavia"]),
    ("budapest", &["budapest"]),
    ("bucharest", &["bucuresti", "bucharest", "bucarest"]),
    ("sofia", &["sofia"]),
    ("athens", &["athenai", "athens", "atenne"]),
    ("lisbon", &["lisboa", "lisbon", "lisbona"]),
    ("porto", &["porto", "oporto"]),
    ("dublin", &["dublin", "dublino"]),
    ("copenhagen", &["kobenhavn", "copenhagen", "copenaghen", "cph"]),
    ("stockholm", &["stockholm", "stoccolma", "arn"]),
    ("oslo", &["oslo"]),
    ("helsinki", &["helsingfors", "helsinki", "hel"]),
    ("brussels", &["bruxelles", "brussels", "bru"]),
    ("zurich", &["zurich", "zurigo", "zrh"]),
    ("geneva", &["geneva", "ginevra", "gva"]),
];
