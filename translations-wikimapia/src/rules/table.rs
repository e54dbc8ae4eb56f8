//! Literal Wikimapia category rules.
//!
//! Entries appear in descending order of upstream usage. Each row records the
//! category label exactly as the Wikimapia API returns it, the OSM tags it
//! translates to, and the number of places carrying the category when the
//! table was harvested.

use super::CategoryRule;

const fn rule(
    label: &'static str,
    tags: &'static [(&'static str, &'static str)],
    occurrences: u64,
) -> CategoryRule {
    CategoryRule::new(label, tags, occurrences)
}

/// Rules consulted by lookups.
#[rustfmt::skip]
pub(super) static ACTIVE: &[CategoryRule] = &[
    rule("place without photos", &[("place", "yes")], 22_963_702),
    rule("place without description", &[("place", "yes")], 14_858_547),
    rule("place without category", &[("place", "yes")], 13_606_916),
    rule("building without address", &[("building", "yes")], 6_671_102),
    rule("place without polygon", &[("place", "yes")], 3_542_484),
    rule("building", &[("building", "yes")], 1_917_432),
    rule("home", &[("building", "residential")], 1_898_890),
    rule("residence", &[("building", "residential")], 1_898_890),
    rule("house", &[("building", "house")], 1_898_890),
    rule("villa", &[("building", "villa")], 1_898_890),
    rule("dwelling", &[("building", "residential")], 1_898_890),
    rule("tenement", &[("building", "apartments")], 1_212_206),
    rule("apartment building", &[("building", "apartments")], 1_212_206),
    rule("apartments", &[("building", "apartments")], 1_212_206),
    rule("block of flats", &[("building", "apartments")], 1_212_206),
    rule("tower block", &[("building", "apartments")], 1_212_206),
    rule("place with triangular polygon", &[("place", "yes")], 1_175_369),
    rule("village", &[("place", "village")], 1_112_678),
    rule("shopping and services", &[("shop", "yes")], 1_036_724),
    rule("store / shop", &[("shop", "yes")], 1_028_282),
    rule("dining and leisure", &[("amenity", "restaurant")], 810_321),
    rule("education", &[("amenity", "education")], 771_971),
    rule("school", &[("amenity", "school")], 771_971),
    rule("schoolhouse", &[("building", "school")], 771_971),
    rule("schooling", &[("amenity", "school")], 771_971),
    rule("religion", &[("amenity", "religion")], 714_451),
    rule("faith", &[("amenity", "religion")], 714_451),
    rule("religious", &[("amenity", "religion")], 714_451),
    rule("place of worship", &[("amenity", "place_of_worship")], 614_034),
    rule("water", &[("natural", "water")], 594_749),
    rule("nonresidential building", &[("building", "yes"), ("residential", "no")], 489_750),
    rule("restaurant", &[("amenity", "restaurant")], 465_340),
    rule("eatery", &[("amenity", "restaurant")], 465_340),
    rule("administrative division", &[("boundary", "administrative")], 436_874),
    rule("lake", &[("natural", "water"), ("water", "lake")], 428_926),
    rule("production", &[("industrial", "yes")], 395_727),
    rule("industry", &[("industrial", "yes")], 395_727),
    rule("sports center", &[("leisure", "sports_centre")], 347_537),
    rule("sports venue", &[("amenity", "event_venue")], 347_537),
    rule("sports centre", &[("leisure", "sports_centre")], 347_537),
    rule("park", &[("leisure", "park")], 343_914),
    rule("christianity", &[("religion", "christian")], 318_848),
    rule("medical", &[("amenity", "medical")], 316_473),
    rule("hotel", &[("building", "hotel")], 288_783),
    rule("motor vehicles", &[("motor_vehicle", "yes")], 283_740),
    rule("office building", &[("building", "office")], 271_671),
    rule("offices", &[("building", "office")], 271_671),
    rule("pont", &[("bridge", "yes")], 260_050),
    rule("bridge", &[("bridge", "yes")], 260_050),
    rule("church", &[("building", "church")], 259_701),
    rule("[automobile maintenance]", &[("shop", "car_repair")], 250_570),
    rule("electric power", &[("power", "electric")], 232_202),
    rule("burial monument/structure", &[("tomb", "vault")], 228_810),
    rule("place with historical importance", &[("place", "yes"), ("historic", "yes")], 220_790),
    rule("interesting place", &[("place", "yes")], 210_694),
    rule("cemetery", &[("landuse", "cemetery")], 205_955),
    rule("graveyard", &[("amenity", "grave_yard")], 205_955),
    rule("graves", &[("cemetery", "grave")], 205_955),
    rule("gravesite", &[("cemetery", "grave")], 205_955),
    rule("neighborhood", &[("place", "neighbourhood")], 186_988),
    rule("neighbourhood", &[("place", "neighbourhood")], 186_988),
    rule("invisible", &[("invisible", "yes")], 176_159),
    rule("railway", &[("railway", "rail")], 173_698),
    rule("railroad", &[("railway", "rail")], 173_698),
    rule("public transport", &[("public_transport", "yes")], 170_298),
    rule("military", &[("military", "yes")], 165_392),
    rule("islam", &[("religion", "muslim")], 163_004),
    rule("muslim", &[("religion", "muslim")], 163_004),
    rule("petrol / gas station", &[("amenity", "fuel")], 162_428),
    rule("gasbar", &[("amenity", "fuel")], 162_428),
    rule("filling station", &[("amenity", "fuel")], 162_428),
    rule("fueling station", &[("amenity", "fuel")], 162_428),
    rule("temple", &[("amenity", "place_of_worship"), ("building", "temple")], 160_515),
    rule("financial services", &[("office", "financial_services")], 155_041),
    rule("city", &[("place", "city")], 153_051),
    rule("mosque", &[("building", "mosque")], 149_014),
    rule("masjid", &[("building", "mosque")], 149_014),
    rule("hospital", &[("amenity", "hospital")], 145_644),
    rule("sport court", &[("leisure", "pitch")], 131_193),
    rule("pitch (sports field / ground)", &[("leisure", "pitch")], 131_193),
    rule("sports ground", &[("leisure", "pitch")], 131_193),
    rule("agriculture", &[("use", "agriculture")], 114_935),
    rule("mountain", &[("natural", "mountain")], 111_493),
    rule("mount", &[("natural", "mountain")], 111_493),
    rule("power transmission line", &[("power", "line")], 109_333),
    rule("bank", &[("amenity", "bank")], 108_073),
    rule("savings bank", &[("amenity", "bank")], 108_073),
    rule("pond", &[("water", "pond")], 104_459),
    rule("island", &[("place", "island")], 104_294),
    rule("key (island)", &[("place", "key")], 104_294),
    rule("isle", &[("place", "island")], 104_294),
    rule("islet", &[("place", "islet")], 104_294),
    rule("cay", &[("natural", "cay")], 104_294),
    rule("islands", &[("place", "island")], 104_294),
    rule("aviation", &[("amenity", "aviation")], 103_024),
    rule("electricity pylon", &[("power", "tower")], 101_862),
    rule("transmission tower (electric / electricity)", &[("power", "tower")], 101_862),
    rule("hydro tower", &[("man_made", "water_tower")], 101_862),
    rule("bazaar", &[("amenity", "marketplace"), ("highway", "pedestrian")], 97_500),
    rule("indoor market", &[("amenity", "marketplace")], 97_500),
    rule("souk", &[("amenity", "marketplace")], 97_500),
    rule("marketplace", &[("amenity", "marketplace")], 97_500),
    rule("chowk (marketplace)", &[("amenity", "marketplace")], 97_500),
    rule("market square", &[("amenity", "marketplace"), ("highway", "pedestrian")], 97_500),
    rule("stadium", &[("leisure", "stadium")], 89_455),
    rule("bus stop", &[("public_transport", "stop_position"), ("bus", "yes")], 88_819),
    rule("bus stand", &[("public_transport", "stop_position"), ("bus", "yes")], 88_819),
    rule("law enforcement", &[("amenity", "police")], 82_748),
    rule("bar", &[("amenity", "bar")], 82_675),
    rule("cocktail lounge", &[("amenity", "bar"), ("cocktails", "yes")], 82_675),
    rule("saloon (bar)", &[("amenity", "bar")], 82_675),
    rule("commercial building", &[("building", "commercial")], 82_373),
    rule("[constructions by dates]", &[("construction", "yes")], 81_190),
    rule("train station", &[("railway", "station")], 76_868),
    rule("railroad station", &[("railway", "station")], 76_868),
    rule("railway halt", &[("railway", "halt")], 76_868),
    rule("railway station", &[("railway", "station")], 76_868),
    rule("region", &[("place", "region")], 76_675),
    rule("regions", &[("place", "region")], 76_675),
    rule("university", &[("amenity", "university")], 75_637),
    rule("parking", &[("amenity", "parking")], 75_437),
    rule("water supply network", &[("amenity", "water_supply")], 71_065),
    rule("police station", &[("amenity", "police")], 70_419),
    rule("residential neighborhood", &[("landuse", "residential"), ("place", "neighbourhood")], 70_223),
    rule("residential area", &[("landuse", "residential")], 70_223),
    rule("residential neighbourhood", &[("landuse", "residential"), ("place", "neighbourhood")], 70_223),
    rule("drugstore", &[("amenity", "pharmacy")], 69_933),
    rule("pharmacy", &[("amenity", "pharmacy")], 69_933),
    rule("medical dispensary", &[("amenity", "pharmacy")], 69_933),
    rule("medical store / shop", &[("shop", "medical")], 69_933),
    rule("chemist", &[("shop", "chemist")], 69_933),
    rule("garden", &[("leisure", "garden")], 69_078),
    rule("abandoned / shut down / defunct", &[("abandoned", "yes")], 66_928),
    rule("cafe", &[("amenity", "cafe")], 65_767),
    rule("museum", &[("amenity", "museum")], 65_518),
    rule("apartment complex", &[("building", "apartments")], 63_638),
    rule("housing complex", &[("building", "apartments")], 63_638),
    rule("housing / apartment colony", &[("building", "apartments")], 63_638),
    rule("listed building / architectural heritage", &[("historic", "building")], 63_379),
    rule("urotshistshe (stow)", &[("rawWmCategory", "urotshistshe_(stow)")], 63_368),
    rule("nursery school", &[("amenity", "nursery")], 62_531),
    rule("kindergarten", &[("amenity", "kindergarten")], 62_531),
    rule("preschool education", &[("amenity", "kindergarten")], 62_531),
    rule("playgroup", &[("amenity", "creche")], 62_531),
    rule("pre-school", &[("amenity", "kindergarten")], 62_531),
    rule("playschool", &[("amenity", "kindergarten")], 62_531),
    rule("supermarket", &[("shop", "supermarket")], 62_404),
    rule("monument", &[("historic", "monument")], 60_409),
    rule("historical layer / disappeared object", &[("rawWmCategory", "historical_layer_/_disappeared_object")], 60_345),
    rule("electrical sub-station", &[("power", "sub_station")], 57_539),
    rule("electrical substation", &[("power", "sub_station")], 57_539),
    rule("electrical grid station", &[("power", "sub_station")], 57_539),
    rule("electrical converter station", &[("power", "sub_station")], 57_539),
    rule("primary education", &[("amenity", "school"), ("isced:level", "1")], 57_444),
    rule("elementary school", &[("amenity", "school"), ("isced:level", "1")], 57_444),
    rule("junior school", &[("amenity", "school"), ("isced:level", "1")], 57_444),
    rule("primary school", &[("amenity", "school"), ("isced:level", "1")], 57_444),
    rule("road bridge", &[("bridge", "yes"), ("transport:type", "road")], 56_124),
    rule("accommodation bridge", &[("bridge", "yes"), ("accomodation", "yes")], 56_124),
    rule("professional services", &[("office", "professional_services")], 55_893),
    rule("fenced area", &[("landuse", "fenced_area")], 54_857),
    rule("grocery / grocery store", &[("shop", "grocery")], 52_808),
    rule("fort", &[("historic", "fort")], 52_679),
    rule("fortress", &[("historic", "castle"), ("castle_type", "fortress")], 52_679),
    rule("forts", &[("historic", "fort")], 52_679),
    rule("fortification", &[("fortified", "yes")], 52_679),
    rule("ruins", &[("ruins", "yes")], 52_159),
    rule("takeaway", &[("takeaway", "yes")], 51_993),
    rule("carryout", &[("takeaway", "yes")], 51_993),
    rule("take away / take out / carry out food", &[("takeaway", "yes")], 51_993),
    rule("takeout", &[("takeaway", "yes")], 51_993),
    rule("post office", &[("amenity", "post_office")], 50_312),
    rule("farm", &[("place", "farm")], 49_882),
    rule("farming", &[("landuse", "farmland")], 49_882),
    rule("square", &[("highway", "pedestrian")], 49_635),
    rule("car repair/ maintenance service", &[("shop", "car_repair")], 49_448),
    rule("automobile repair shop", &[("shop", "car_repair")], 49_448),
    rule("garage (automobile repair)", &[("shop", "car_repair)")], 49_448),
    rule("car park", &[("amenity", "parking")], 49_028),
    rule("parking lot", &[("amenity", "parking")], 49_028),
    rule("lorry park", &[("amenity", "parking")], 49_028),
    rule("summer cottage area", &[("tourism", "chalet")], 48_183),
    rule("fast food restaurant", &[("amenity", "fast_food")], 48_011),
    rule("warehouse", &[("building", "warehouse")], 47_836),
    rule("secondary education", &[("amenity", "school"), ("icsed", "2")], 47_012),
    rule("high school", &[("amenity", "school"), ("icsed", "2")], 47_012),
    rule("gymnasium - education", &[("amenity", "school"), ("icsed", "2")], 47_012),
    rule("university-preparatory school", &[("amenity", "school"), ("icsed", "4")], 47_012),
    rule("secondary school", &[("amenity", "school"), ("icsed", "2")], 47_012),
    rule("road", &[("highway", "road")], 45_153),
    rule("beach", &[("natural", "beach")], 44_915),
    rule("children's play area", &[("leisure", "playground")], 43_646),
    rule("playground", &[("leisure", "playground")], 43_646),
    rule("playscape", &[("leisure", "playground")], 43_646),
    rule("play area", &[("leisure", "playground")], 43_646),
    rule("swimming pool", &[("leisure", "swimming_pool")], 41_030),
    rule("hamlet", &[("place", "hamlet")], 40_176),
    rule("sub-village", &[("place", "village")], 40_176),
    rule("town", &[("place", "town")], 40_017),
    rule("20th century construction", &[("historic:period", "20th_century_construction")], 39_586),
    rule("catholicism", &[("religion", "catholic")], 39_576),
    rule("catholic", &[("religion", "catholic")], 39_576),
    rule("shopping mall", &[("shop", "mall")], 39_478),
    rule("shopping center", &[("shop", "mall")], 39_478),
    rule("shopping arcade", &[("shop", "mall")], 39_478),
    rule("shopping centre", &[("shop", "mall")], 39_478),
    rule("retail shopping center", &[("shop", "mall")], 39_478),
    rule("library", &[("amenity", "library")], 38_139),
    rule("archaeological site", &[("historic", "archaeological_site")], 37_551),
    rule("archeological site", &[("historic", "archaeological_site")], 37_551),
    rule("firefighters", &[("amenity", "fire_station")], 37_279),
    rule("fire station", &[("amenity", "fire_station")], 37_279),
    rule("fire service", &[("amenity", "fire_station")], 37_279),
    rule("fireman", &[("amenity", "fire_station")], 37_279),
    rule("fire brigade", &[("amenity", "fire_station")], 37_279),
    rule("fire department", &[("amenity", "fire_station")], 37_279),
    rule("intersection (road)", &[("junction", "yes"), ("highway", "road")], 37_047),
    rule("crossroad", &[("junction", "yes")], 37_047),
    rule("chowk (road junction)", &[("junction", "yes"), ("highway", "road")], 37_047),
    rule("road junction", &[("junction", "yes"), ("highway", "road")], 37_047),
    rule("motorway junction", &[("highway", "motorway_junction")], 37_047),
    rule("airport", &[("aeroway", "aerodrome")], 37_023),
    rule("airfield", &[("aeroway", "aerodrome")], 37_023),
    rule("airstrip", &[("aeroway", "aerodrome")], 37_023),
    rule("water tower", &[("man_made", "water_tower")], 36_653),
    rule("football pitch", &[("leisure", "pitch"), ("sport", "football")], 36_625),
    rule("football - soccer field", &[("leisure", "pitch"), ("sport", "soccer")], 36_625),
    rule("football field", &[("leisure", "pitch"), ("sport", "football")], 36_625),
    rule("coastal construction", &[("landuse", "coastal_construction")], 36_311),
    rule("animals", &[("amenity", "animals")], 34_688),
    rule("water treatment", &[("man_made", "water_works")], 34_600),
    rule("water purification", &[("man_made", "water_works")], 34_600),
    rule("transformer substation", &[("power", "sub_station")], 34_283),
    rule("condo", &[("building", "apartments")], 34_023),
    rule("condominium", &[("building", "apartments")], 34_023),
    rule("academic institution", &[("amenity", "school")], 33_972),
    rule("[automotive industry]", &[("landuse", "industrial"), ("industrial", "automotive")], 33_099),
    rule("apartment", &[("building", "apartments")], 33_029),
    rule("flat", &[("building", "appartments")], 33_029),
    rule("factory", &[("man_made", "works")], 32_509),
    rule("plant", &[("man_made", "works")], 32_509),
    rule("wastewater treatment plant", &[("man_made", "wastewater_plant")], 31_851),
    rule("sewage treatment plant", &[("man_made", "wastewater_plant")], 31_851),
    rule("effluent treatment plant", &[("man_made", "wastewater_plant")], 31_851),
    rule("water reclamation plant", &[("man_made", "water_works")], 31_851),
    rule("forest", &[("landuse", "forest")], 31_796),
    rule("mine", &[("landuse", "mineral_mining")], 31_657),
    rule("garage", &[("building", "garage")], 31_375),
    rule("car dealership", &[("shop", "car")], 30_946),
    rule("car showroom", &[("shop", "car")], 30_946),
    rule("automobile / car dealer (sales)", &[("shop", "car")], 30_946),
    rule("memorial", &[("historic", "memorial")], 30_596),
    rule("Catholic church", &[("amenity", "place_of_worship"), ("religion", "catholic")], 30_497),
    rule("clothes store / boutique", &[("shop", "clothes")], 30_087),
    rule("clothing store", &[("shop", "clothes")], 30_087),
    rule("oil and gas industry", &[("landuse", "oil_and_gas_industry")], 29_928),
    rule("petroleum industry", &[("landuse", "petroleum_industry")], 29_928),
    rule("municipality", &[("place", "municipality")], 29_445),
    rule("indoor tennis court(s)", &[("leisure", "pitch"), ("sport", "tennis")], 28_201),
    rule("tennis court(s)", &[("leisure", "pitch"), ("sport", "tennis")], 28_201),
    rule("household yard", &[("landuse", "residential")], 28_047),
    rule("atm / cash machine", &[("amenity", "atm")], 27_953),
    rule("district, hamlet", &[("place", "hamlet")], 27_493),
    rule("ortsteil", &[("place", "neighbourhood")], 27_493),
    rule("cinema", &[("amenity", "cinema")], 26_916),
    rule("cineworld", &[("amenity", "cinema")], 26_916),
    rule("movie theater", &[("amenity", "cinema")], 26_916),
    rule("talkies (cinema)", &[("amenity", "cinema")], 26_916),
    rule("golf course", &[("leisure", "golf_course")], 26_599),
    rule("golf link", &[("leisure", "golf_course")], 26_599),
    rule("retailer", &[("shop", "yes")], 26_573),
    rule("district office", &[("office", "administrative")], 26_161),
    rule("town hall", &[("amenity", "townhall")], 26_161),
    rule("civic hall", &[("amenity", "townhall")], 26_161),
    rule("civic centre", &[("amenity", "community_centre")], 26_161),
    rule("city hall", &[("amenity", "townhall")], 26_161),
    rule("county hall", &[("amenity", "townhall")], 26_161),
    rule("council house - local government", &[("office", "administrative")], 26_161),
    rule("municipal hall", &[("amenity", "townhall")], 26_161),
    rule("dorm", &[("building", "dormitory")], 26_039),
    rule("dormitory", &[("building", "dormitory")], 26_039),
    rule("hall of residence", &[("building", "dormitory")], 26_039),
    rule("student accommodation", &[("building", "dormitory")], 26_039),
    rule("residence hall", &[("building", "dormitory")], 26_039),
    rule("sari-sari store (Philippines)", &[("shop", "convenience")], 25_378),
    rule("convenience store", &[("shop", "convenience")], 25_378),
    rule("hinduism", &[("religion", "hindu")], 25_373),
    rule("hairdresser", &[("shop", "hairdresser")], 25_237),
    rule("hairstylist", &[("shop", "hairdresser")], 25_237),
    rule("hair salon", &[("shop", "hairdresser")], 25_237),
    rule("household goods store / shop", &[("shop", "houseware")], 24_467),
    rule("quarter (urban subdivision)", &[("place", "quarter")], 24_430),
    rule("urban settlement or rural community", &[("place", "village")], 24_430),
    rule("railway bridge", &[("bridge", "yes"), ("transport:type", "railway")], 24_239),
    rule("heating", &[("amenity", "heating")], 23_997),
    rule("bog", &[("natural", "wetland"), ("wetland", "bog")], 23_667),
    rule("quagmire", &[("natural", "wetland"), ("wetland", "bog")], 23_667),
    rule("mire", &[("natural", "wetland"), ("wetland", "bog")], 23_667),
    rule("wetland", &[("natural", "wetland")], 23_667),
    rule("medical clinic", &[("amenity", "clinic")], 23_176),
    rule("medical centre", &[("amenity", "clinic")], 23_176),
    rule("health centre", &[("amenity", "health_centre")], 23_176),
    rule("health center", &[("amenity", "health_centre")], 23_176),
    rule("sculpture", &[("tourism", "artwork"), ("artwork_type", "sculpture")], 23_044),
    rule("night club", &[("amenity", "nightclub")], 23_002),
    rule("theater", &[("amenity", "theatre")], 22_754),
    rule("theatre", &[("amenity", "theatre")], 22_754),
    rule("green area", &[("leisure", "park")], 22_733),
    rule("administrative building", &[("building", "administrative")], 22_642),
    rule("orthodox christianity", &[("religion", "christian"), ("denomination", "orthodox")], 22_357),
    rule("conglomerate", &[("rawWmCategory", "conglomerate")], 22_132),
    rule("company", &[("office", "company")], 22_132),
    rule("firm", &[("office", "company")], 22_132),
    rule("under construction", &[("construction", "yes")], 22_112),
    rule("settlement", &[("place", "settlement")], 21_422),
    rule("dam", &[("waterway", "dam")], 21_370),
    rule("Second World War 1939-1945", &[("historic:period", "Second_World_War_1939-1945")], 21_182),
    rule("pub / public house", &[("amenity", "pub")], 20_965),
    rule("community center / hall", &[("amenity", "community_centre")], 20_717),
    rule("community centre / hall", &[("amenity", "community_centre")], 20_717),
    rule("communal house", &[("building", "communal_house")], 20_717),
    rule("tower", &[("man_made", "tower")], 20_648),
    rule("hindu temple", &[("building", "temple"), ("amenity", "place_of_worship"), ("religion", "hindu")], 20_177),
    rule("mandir", &[("building", "temple"), ("amenity", "place_of_worship"), ("religion", "hindu")], 20_177),
    rule("workshop", &[("building", "workshop")], 19_477),
    rule("swamp", &[("natural", "wetland"), ("wetland", "swamp")], 19_165),
    rule("reservoir", &[("landuse", "reservoir")], 18_983),
    rule("artificial lake", &[("natural", "water"), ("water", "reservoir")], 18_983),
    rule("manmade lake", &[("natural", "water"), ("water", "reservoir")], 18_983),
    rule("gym / gymnasium - sports", &[("amenity", "gym")], 18_864),
    rule("school yard", &[("amenity", "school")], 18_727),
    rule("abandoned settlement", &[("abandoned:place", "settlement")], 18_677),
    rule("ghost town", &[("abandoned:place", "ghost_town")], 18_677),
    rule("pizzeria", &[("amenity", "restaurant"), ("cuisine", "pizza")], 18_535),
    rule("pizza shop / parlor", &[("amenity", "restaurant"), ("cuisine", "pizza")], 18_535),
    rule("foot over bridge (fob)", &[("highway", "footway"), ("bridge", "yes")], 18_399),
    rule("footbridge", &[("highway", "footway"), ("bridge", "yes")], 18_399),
    rule("pedestrian overpass", &[("highway", "footway"), ("bridge", "yes")], 18_399),
    rule("earthworks", &[("man_made", "earthworks")], 18_348),
    rule("earthwork (archaeology)", &[("historic", "archaeological_site"), ("site_type", "earthworks")], 18_348),
    rule("fountain", &[("amenity", "fountain")], 18_306),
    rule("peak", &[("natural", "peak")], 18_133),
    rule("mountaintop", &[("natural", "peak")], 18_133),
    rule("summit", &[("natural", "peak")], 18_133),
    rule("pinnacle", &[("natural", "rock_pinnacle")], 18_133),
    rule("hill", &[("natural", "hill")], 17_950),
    rule("knoll", &[("natural", "knoll")], 17_950),
    rule("hillock", &[("natural", "hillock")], 17_950),
    rule("hills", &[("natural", "hill")], 17_950),
    rule("street", &[("highway", "road"), ("ref:road:type", "street")], 17_551),
    rule("avenue", &[("highway", "road"), ("ref:road:type", "avenue")], 17_551),
    rule("alley", &[("highway", "service"), ("service", "alley")], 17_551),
    rule("lane", &[("highway", "unclassified"), ("ref:road:type", "lane")], 17_551),
    rule("boulevard", &[("highway", "road"), ("ref:road:type", "boulevard")], 17_551),
    rule("farm land / agricultural area", &[("landuse", "farmland")], 17_525),
    rule("open-pit mine", &[("landuse", "mineral_mining"), ("mine:type", "opencast")], 17_520),
    rule("mobile phone transmitter / mast", &[("man_made", "mast"), ("tower:type", "communications"), ("communication:mobile_phone", "yes")], 17_505),
    rule("cell site / cell tower", &[("man_made", "tower"), ("tower:type", "communications"), ("communication:mobile_phone", "yes")], 17_505),
    rule("bts", &[("rawWmCategory", "bts")], 17_505),
    rule("base transceiver/ GSM station", &[("man_made", "mast"), ("tower:type", "communications"), ("communication:mobile_phone", "gsm")], 17_505),
    rule("pets", &[("amenity", "pets")], 17_493),
    rule("subdivision", &[("place", "neighbourhood")], 17_489),
    rule("chapel", &[("building", "chapel"), ("amenity", "place_of_worship")], 17_456),
    rule("middle school", &[("amenity", "school"), ("isced:level", "2")], 17_429),
    rule("junior high school", &[("amenity", "school"), ("isced:level", "3")], 17_429),
    rule("intermediate school", &[("amenity", "school"), ("isced:level", "3")], 17_429),
    rule("power plant", &[("power", "plant"), ("landuse", "industrial")], 17_409),
    rule("power house", &[("power", "generator")], 17_409),
    rule("power station", &[("power", "plant"), ("landuse", "industrial")], 17_409),
    rule("generating station", &[("power", "generator")], 17_409),
    rule("railroad crossing", &[("railway", "crossing")], 17_397),
    rule("level crossing", &[("railway", "level_crossing")], 17_397),
    rule("railway crossing", &[("railway", "crossing")], 17_397),
    rule("train crossing", &[("railway", "crossing")], 17_397),
    rule("grade crossing", &[("railway", "crossing")], 17_397),
    rule("sports club", &[("club", "sport")], 17_126),
    rule("club", &[("club", "yes")], 17_031),
    rule("automotive parts dealer", &[("shop", "car_parts")], 17_013),
    rule("car accessories store", &[("shop", "car_parts")], 17_013),
    rule("RV / caravan park", &[("tourism", "caravan_site")], 16_940),
    rule("campsite", &[("tourism", "campsite")], 16_940),
    rule("camping pitch", &[("tourism", "campsite")], 16_940),
    rule("campgrounds", &[("tourism", "campsite")], 16_940),
    rule("RV Resort", &[("tourism", "campsite"), ("RV", "yes")], 16_940),
    rule("bus station", &[("public_transport", "station"), ("bus", "yes")], 16_935),
    rule("coach station", &[("public_transport", "station"), ("bus", "yes")], 16_935),
    rule("bus terminal", &[("public_transport", "station"), ("bus", "yes")], 16_935),
    rule("semi-detached house", &[("building", "house")], 16_909),
    rule("quarry", &[("landuse", "quarry")], 16_904),
    rule("furniture store / shop", &[("shop", "furniture")], 16_709),
    rule("tunnel", &[("tunnel", "yes")], 16_687),
    rule("display", &[("rawWmCategory", "display")], 16_591),
    rule("auto wash", &[("amenity", "car_wash")], 16_573),
    rule("car wash", &[("amenity", "car_wash")], 16_573),
    rule("bakery", &[("shop", "bakery")], 16_323),
    rule("bakehouse", &[("shop", "bakery")], 16_323),
    rule("wind turbine", &[("power", "generator"), ("generator:source", "wind"), ("generator:method", "wind_turbine"), ("generator:output", "electricity")], 16_139),
    rule("fourth-level administrative division", &[("boundary", "administrative"), ("admin_level", "4")], 15_913),
    rule("protestantism", &[("religion", "christian"), ("denomination", "protestant")], 15_849),
    rule("protestant", &[("religion", "christian"), ("denomination", "protestant")], 15_849),
    rule("hardware store", &[("shop", "hardware")], 15_494),
    rule("DIY store", &[("shop", "doityourself")], 15_494),
    rule("home improvement / hardware store", &[("shop", "doityourself")], 15_494),
    rule("painting and decorating shop", &[("shop", "paint")], 15_494),
    rule("home improvement center", &[("shop", "doityourself")], 15_494),
    rule("historical building", &[("historic", "building")], 15_202),
    rule("NAVAID - navigational aid", &[("aeroway", "navigationalaid")], 15_187),
    rule("ATON - aid to navigation", &[("aeroway", "aid_to_navigation")], 15_187),
    rule("bathhouse", &[("amenity", "public_bath")], 15_148),
    rule("thermae", &[("amenity", "public_bath")], 15_148),
    rule("public baths", &[("amenity", "public_bath")], 15_148),
    rule("banya", &[("leisure", "sauna")], 15_148),
    rule("steambath", &[("leisure", "sauna")], 15_148),
    rule("hostel", &[("tourism", "hostel")], 15_013),
    rule("basketball court", &[("leisure", "pitch"), ("sport", "basketball")], 14_881),
    rule("dentist", &[("amenity", "dentist")], 14_804),
    rule("dental practice", &[("amenity", "dentist")], 14_804),
    rule("dental clinic", &[("amenity", "dentist")], 14_804),
    rule("bay", &[("natural", "bay")], 14_748),
    rule("gulf", &[("natural", "gulf")], 14_748),
    rule("service", &[("rawWmCategory", "service")], 14_701),
    rule("commune - administrative division", &[("boundary", "administrative"), ("admin_level", "7")], 14_475),
    rule("roundabout / traffic circle", &[("junction", "roundabout")], 14_417),
    rule("chowk (roundabout / traffic circle)", &[("junction", "roundabout")], 14_417),
    rule("colony / nagar - neighbourhood in India", &[("place", "neighbourhood")], 14_392),
    rule("castle", &[("historic", "castle")], 14_087),
    rule("checkpoint", &[("barrier", "checkpoint")], 14_087),
    rule("spring", &[("natural", "spring")], 14_063),
    rule("war memorial", &[("historic", "memorial"), ("memorial:type", "war_memorial")], 13_898),
    rule("building materials", &[("rawWmCategory", "building_materials")], 13_816),
    rule("boiler house", &[("building", "boiler_house")], 13_748),
    rule("heat-only boiler station", &[("building", "industrial"), ("product", "heating_steam_and/or_water")], 13_748),
    rule("architectural style", &[("rawWmCategory", "architectural_style")], 13_636),
    rule("football / soccer stadium", &[("leisure", "stadium")], 13_230),
    rule("gate", &[("barrier", "gate")], 13_172),
    rule("courthouse", &[("amenity", "courthouse")], 13_129),
    rule("transportation", &[("amenity", "transportation")], 13_021),
    rule("jeepney stop", &[("public_transport", "stop_position"), ("jeepney", "yes")], 12_833),
    rule("share taxi stop", &[("public_transport", "stop_position"), ("taxi", "yes")], 12_833),
    rule("bush taxi stop", &[("public_transport", "stop_position"), ("taxi", "yes")], 12_833),
    rule("ancient civilization", &[("historic", "ancient_civilization")], 12_726),
    rule("abbey", &[("building", "abbey"), ("amenity", "place_of_worship")], 12_599),
    rule("convent", &[("building", "convent"), ("amenity", "place_of_worship")], 12_599),
    rule("convento", &[("building", "convent"), ("amenity", "place_of_worship")], 12_599),
    rule("monastery", &[("building", "monastery"), ("amenity", "place_of_worship")], 12_599),
    rule("priory", &[("building", "priory"), ("amenity", "place_of_worship")], 12_599),
    rule("leisure", &[("leisure", "yes")], 12_556),
    rule("barangay", &[("place", "village")], 12_478),
    rule("industrial estate", &[("landuse", "industrial")], 12_241),
    rule("industrial area", &[("landuse", "industrial")], 12_241),
    rule("industrial zone", &[("landuse", "industrial")], 12_241),
    rule("industrial district", &[("landuse", "industrial")], 12_241),
    rule("aeroplane on display", &[("historic", "aircraft")], 12_238),
    rule("aircraft on display", &[("historic", "aircraft")], 12_238),
    rule("helicopter on display", &[("historic", "helicopter")], 12_238),
    rule("public garden", &[("leisure", "garden")], 12_168),
    rule("green space", &[("leisure", "park")], 12_168),
    rule("urban open space", &[("rawWmCategory", "urban_open_space")], 12_168),
    rule("district", &[("place", "district")], 12_161),
    rule("chimney", &[("man_made", "chimney")], 12_091),
    rule("smokestack", &[("man_made", "chimney")], 12_091),
    rule("terraced / row house - townhome / townhouse", &[("building", "terrace")], 11_967),
    rule("townhome", &[("building", "terrace")], 11_967),
    rule("townhouse", &[("building", "terrace")], 11_967),
    rule("runway", &[("aeroway", "runway")], 11_949),
    rule("landing strip", &[("aeroway", "runway")], 11_949),
    rule("aircraft", &[("aircraft", "yes")], 11_852),
    rule("organization", &[("rawWmCategory", "organization")], 11_846),
    rule("organisation", &[("rawWmCategory", "organisation")], 11_846),
    rule("pumping station", &[("man_made", "pumping_station")], 11_661),
    rule("tube station", &[("railway", "station"), ("subway", "yes")], 11_618),
    rule("metro station", &[("railway", "station"), ("subway", "yes")], 11_618),
    rule("underground station", &[("railway", "station"), ("subway", "yes")], 11_618),
    rule("subway station", &[("railway", "station"), ("subway", "yes")], 11_618),
    rule("food industry", &[("landuse", "industrial"), ("industrial", "food")], 11_580),
    rule("protected area", &[("boundary", "protected_area")], 11_392),
    rule("nature reserve", &[("leisure", "nature_reserve")], 11_392),
    rule("nature conservation park / area", &[("boundary", "protected_area"), ("protect_class", "7")], 11_392),
    rule("wilderness area", &[("boundary", "protected_area"), ("protect_class", "1")], 11_392),
    rule("wildlife sanctuary", &[("boundary", "protected_area"), ("protect_class", "4")], 11_392),
    rule("nature preserve", &[("boundary", "protected_area"), ("protect_class", "7")], 11_392),
    rule("policlinic", &[("amenity", "clinic")], 11_391),
    rule("outpatient clinic", &[("amenity", "clinic")], 11_391),
    rule("polyclinic", &[("amenity", "clinic")], 11_391),
    rule("mill", &[("landuse", "industrial"), ("industrial", "mill")], 11_390),
    rule("trolleybus stop", &[("public_transport", "stop_position"), ("trolleybus", "yes")], 11_372),
    rule("headland", &[("natural", "headland")], 11_218),
    rule("campus", &[("amenity", "campus")], 11_190),
    rule("watercraft", &[("rawWmCategory", "watercraft")], 11_137),
    rule("tram stop", &[("public_transport", "stop_position"), ("tram", "yes")], 11_090),
    rule("streetcar stop", &[("public_transport", "stop_position"), ("trolleybus", "yes")], 11_090),
    rule("telecom", &[("telecom", "yes")], 11_044),
    rule("telecommunication", &[("telecom", "yes")], 11_044),
    rule("beauty salon", &[("shop", "beauty")], 10_972),
    rule("beauty parlor", &[("shop", "beauty")], 10_972),
    rule("embassy / consulate / diplomatic mission", &[("amenity", "embassy")], 10_925),
    rule("dining hall", &[("amenity", "dining_hall")], 10_924),
    rule("banqueting hall", &[("amenity", "events_venue")], 10_924),
    rule("canteen", &[("amenity", "canteen")], 10_924),
    rule("nuragic civilization - archeology", &[("historic", "archaeological_site"), ("historic:civilization", "nuragic")], 10_885),
    rule("government", &[("office", "government")], 10_839),
    rule("shed", &[("building", "shed")], 10_774),
    rule("prison", &[("amenity", "prison")], 10_638),
    rule("jail", &[("amenity", "prison")], 10_638),
    rule("jailhouse", &[("amenity", "prison")], 10_638),
    rule("area - to be replaced", &[("rawWmCategory", "area_-_to_be_replaced")], 10_568),
    rule("overpass / flyover", &[("overpass", "yes")], 10_560),
    rule("buddhism", &[("religion", "buddhist")], 10_553),
    rule("cottage", &[("building", "cottage")], 10_531),
    rule("footwear shop", &[("shop", "shoes")], 10_473),
    rule("shoe shop / store", &[("shop", "shoes")], 10_471),
    rule("business centre/ building", &[("building", "commercial")], 10_444),
    rule("round barrow", &[("site_type", "round_barrow")], 10_261),
    rule("barrow/tumulus/burial mound", &[("site_type", "barrow/tumulus/burial_mound")], 10_261),
    rule("long barrow", &[("site_type", "long_barrow")], 10_261),
    rule("burial mound", &[("site_type", "burial_mound")], 10_261),
    rule("howe", &[("rawWmCategory", "howe")], 10_261),
    rule("bowl barrow", &[("site_type", "bowl_barrow")], 10_261),
    rule("bank barrow", &[("site_type", "bank_barrow")], 10_261),
    rule("bell barrow", &[("site_type", "bell_barrow")], 10_261),
    rule("electronic goods retailer / manufacturer", &[("shop", "electronics")], 10_198),
    rule("third-level administrative division", &[("boundary", "administrative"), ("admin_level", "3")], 10_193),
    rule("playing field", &[("leisure", "pitch")], 10_154),
    rule("recreation area / ground", &[("leisure", "park")], 10_154),
    rule("lab", &[("amenity", "laboratory")], 10_150),
    rule("laboratories", &[("amenity", "laboratory")], 10_150),
    rule("labs", &[("amenity", "laboratory")], 10_150),
    rule("river", &[("waterway", "river")], 10_050),
    rule("water supply", &[("amenity", "water_supply")], 10_024),
    rule("college - DONT USE OR TRANSLATE THIS CATEGORY IS PLANNED TO BE REMOVED", &[("rawWmCategory", "college_-_DONT_USE_OR_TRANSLATE_THIS_CATEGORY_IS_PLANNED_TO_BE_REMOVED")], 9988),
    rule("tire repair service", &[("shop", "tyres"), ("repair", "yes")], 9931),
    rule("tyre repair service", &[("shop", "tyres"), ("repair", "yes")], 9931),
    rule("tire assembly", &[("industrial", "tire_assembly")], 9931),
    rule("local government", &[("office", "local_government")], 9851),
    rule("trading", &[("shop", "trade")], 9777),
    rule("trade", &[("shop", "trade")], 9777),
    rule("commerce", &[("amenity", "commerce")], 9777),
    rule("kindergarten yard", &[("amenity", "kindergarten")], 9611),
    rule("sign", &[("man_made", "sign")], 9523),
    rule("construction firm / organisation", &[("office", "construction")], 9513),
    rule("construction / building company", &[("office", "construction")], 9513),
    rule("waste management industry", &[("office", "waste_management_industry")], 9498),
    rule("[waste management]", &[("amenity", "waste_management")], 9498),
    rule("fitness suite", &[("leisure", "fitness_centre")], 9467),
    rule("health club", &[("leisure", "fitness_centre")], 9467),
    rule("fitness centre / center", &[("leisure", "fitness_centre")], 9467),
    rule("fitness club", &[("leisure", "fitness_centre")], 9467),
    rule("gym - fitness / health", &[("leisure", "fitness_centre")], 9467),
    rule("public toilet", &[("amenity", "toilets")], 9430),
    rule("restroom", &[("amenity", "toilets")], 9430),
    rule("public washroom", &[("amenity", "toilets")], 9430),
    rule("resort", &[("leisure", "resort")], 9422),
    rule("confluence", &[("water:morphology", "confluence")], 9377),
    rule("statue", &[("tourism", "artwork"), ("artwork_type", "statue")], 9316),
    rule("liquor store", &[("store", "alcohol")], 9194),
    rule("off-licence", &[("shop", "alcohol")], 9194),
    rule("McDonald&#039;s", &[("amenity", "fast_food"), ("cuisine", "burger"), ("name", "McDonald's"), ("brand", "McDonald's")], 9175),
    rule("McDrive", &[("amenity", "fast_food"), ("cuisine", "burger"), ("name", "McDonald's"), ("brand", "McDonald's")], 9175),
    rule("buddhist temple", &[("building", "temple"), ("religion", "buddhist"), ("amenity", "place_of_worship")], 9155),
    rule("wooden", &[("material", "wood")], 8998),
    rule("travel agency", &[("shop", "travel_agency")], 8925),
    rule("bookstore", &[("shop", "books")], 8903),
    rule("bookshop", &[("shop", "books")], 8903),
    rule("1960s construction", &[("historic:period", "1960s_construction")], 8743),
    rule("real estate agency", &[("office", "estate_agent")], 8686),
    rule("estate agents", &[("office", "estate_agent")], 8686),
    rule("vocational school", &[("amenity", "school"), ("icsed", "4")], 8684),
    rule("vocational training", &[("amenity", "school"), ("icsed", "4")], 8684),
    rule("sciences", &[("use", "research")], 8611),
    rule("science", &[("use", "research")], 8611),
    rule("scientist", &[("use", "research")], 8611),
    rule("scientific", &[("use", "research")], 8611),
    rule("airplane", &[("rawWmCategory", "airplane")], 8581),
    rule("aeroplane", &[("rawWmCategory", "aeroplane")], 8581),
    rule("fishing area", &[("leisure", "fishing_area")], 8569),
    rule("fishery", &[("shop", "seafood")], 8569),
    rule("mansion / manor house / villa", &[("historic", "castle"), ("castle_type", "manor")], 8564),
    rule("stately home", &[("historic", "castle"), ("castle_type", "stately")], 8564),
    rule("country house", &[("building", "country_house")], 8564),
    rule("highway interchange / exit", &[("junction", "interchange")], 8464),
    rule("oil/gas well", &[("man_made", "petroleum_well")], 8456),
    rule("pumpjack", &[("man_made", "pumpjack")], 8456),
    rule("aid to navigation - marine", &[("seamark:navigation_aid", "yes")], 8430),
    rule("industrial building", &[("building", "industrial")], 8420),
    rule("carport", &[("amenity", "parking"), ("parking", "carport")], 8420),
    rule("residential garage", &[("building", "garage")], 8420),
    rule("garage cooperative society", &[("building", "garage")], 8420),
    rule("factory building", &[("building", "industrial")], 8420),
    rule("internet cafe", &[("amenity", "internet_cafe")], 8255),
    rule("cybercafe", &[("amenity", "internet_cafe")], 8255),
    rule("net cafe", &[("amenity", "internet_cafe")], 8255),
    rule("sporting goods store", &[("shop", "sports")], 8236),
    rule("sporting/sports equipment", &[("shop", "sports")], 8236),
    rule("sports store / shop", &[("shop", "sports")], 8236),
    rule("sports retailer", &[("shop", "sports")], 8236),
    rule("embassy", &[("amenity", "embassy")], 8214),
    rule("high commission (embassy)", &[("amenity", "embassy")], 8214),
    rule("conjunto", &[("rawWmCategory", "conjunto")], 8184),
    rule("jewellery", &[("shop", "jewelry")], 8146),
    rule("jeweler", &[("shop", "jewelry")], 8146),
    rule("jewelry", &[("shop", "jewelry")], 8146),
    rule("jeweller", &[("shop", "jewelry")], 8146),
    rule("estate (manor / mansion land)", &[("landuse", "estate")], 8080),
    rule("manor (land)", &[("landuse", "manor")], 8080),
    rule("21st century construction", &[("historic:period", "21st_century_construction")], 8052),
    rule("food - to be replaced", &[("shop", "food")], 7948),
    rule("cellphone shop / store", &[("shop", "mobile_phone")], 7938),
    rule("mobile phone retailer", &[("shop", "mobile_phone")], 7938),
    rule("palace", &[("building", "palace")], 7833),
    rule("kiosk", &[("shop", "kiosk")], 7680),
    rule("storage", &[("shop", "storage_rental")], 7666),
    rule("educational building", &[("building", "school")], 7643),
    rule("academic building", &[("building", "school")], 7643),
    rule("community", &[("amenity", "community")], 7618),
    rule("coffeehouse", &[("cuisine", "coffee_shop")], 7616),
    rule("espresso bar", &[("cuisine", "coffee_shop")], 7616),
    rule("fuel storage tank", &[("man_made", "storage_tank"), ("content", "fuel")], 7612),
    rule("junction - Do not use this category, the category is under cleanup", &[("rawWmCategory", "junction_-_Do_not_use_this_category,_the_category_is_under_cleanup")], 7566),
    rule("bed and breakfast", &[("tourism", "guest_housr"), ("guest_houst", "bed_and_breakfast")], 7562),
    rule("Grade II Listed (UK)", &[("historic", "heritage"), ("designation", "Grade_II_Listed_(UK)")], 7511),
    rule("horse", &[("rawWmCategory", "horse")], 7504),
    rule("children", &[("rawWmCategory", "children")], 7423),
    rule("lighthouse", &[("man_made", "lighthouse")], 7398),
    rule("grassland", &[("natural", "grassland")], 7371),
    rule("natural gas industry", &[("landuse", "industrial"), ("industrial", "natural_gas")], 7357),
    rule("prehistoric", &[("historic:civilization", "prehistoric")], 7270),
    rule("public transport terminus", &[("public_transport", "station")], 7192),
    rule("birds", &[("rawWmCategory", "birds")], 7162),
    rule("allotment (gardening)", &[("landuse", "allotments")], 7147),
    rule("seaport", &[("harbour:category", "seaport")], 7136),
    rule("sea port", &[("harbour:category", "seaport")], 7136),
    rule("port", &[("landuse", "port")], 7136),
    rule("teleferic", &[("aerialway", "cable_car")], 7073),
    rule("aerial tramway/ ropeway/ gondola lift/ skilift / cable car station (transport in the air)", &[("aerialway", "station")], 7073),
    rule("cableway", &[("aerialway", "cableway")], 7073),
    rule("child care", &[("amenity", "childcare")], 7053),
    rule("day care", &[("amenity", "childcare")], 7053),
    rule("creche", &[("amenity", "childcare")], 7053),
    rule("motorcycle", &[("rawWmCategory", "motorcycle")], 7046),
    rule("flower shop / florist", &[("shop", "florist")], 7045),
    rule("motel", &[("tourism", "motel")], 7021),
    rule("insurance company", &[("office", "insurance")], 7006),
    rule("culvert", &[("tunnel", "culvert")], 6995),
    rule("NRHP - National Register of Historic Places", &[("historic", "heritage"), ("designation", "NRHP_-_National_Register_of_Historic_Places")], 6971),
    rule("inn", &[("amenity", "pub")], 6933),
    rule("pedestrian crossing", &[("highway", "crossing"), ("crossing", "unknown")], 6915),
    rule("zebra crossing / pelican crossing", &[("highway", "crossing"), ("crossing", "uncontrolled")], 6915),
    rule("crosswalk", &[("highway", "crossing")], 6915),
    rule("[military branch]", &[("military:service", "yes")], 6883),
    rule("Russian Orthodox Church", &[("religion", "christian"), ("denomination", "russian_orthodox")], 6881),
    rule("shelter", &[("amenity", "shelter")], 6794),
    rule("historic landmark", &[("historic", "landmark")], 6720),
    rule("department store", &[("shop", "department_store")], 6718),
    rule("memorial plaque", &[("historic", "menorial"), ("menorial:type", "plaque")], 6710),
    rule("aid to navigation - aviation", &[("aeroway", "aid_to_navigation")], 6689),
    rule("lookout tower", &[("man_made", "tower"), ("tower", "observation")], 6668),
    rule("1970s construction", &[("historic:period", "1970s_construction")], 6661),
    rule("homestead", &[("landuse", "homestead")], 6567),
    rule("institute", &[("amenity", "institute")], 6543),
    rule("railway platform", &[("public_transport", "platform"), ("railway", "platform"), ("train", "yes")], 6530),
    rule("sports complex", &[("leisure", "sports_complex")], 6507),
    rule("sportsplex", &[("leisure", "sports_complex")], 6507),
    rule("artillery battery", &[("military", "battery")], 6497),
    rule("notable event", &[("historic", "notable_event")], 6413),
    rule("bicycle / bike", &[("rawWmCategory", "bicycle_/_bike")], 6353),
    rule("falls", &[("waterway", "waterfall")], 6301),
    rule("waterfall", &[("waterway", "waterfall")], 6301),
    rule("entrance", &[("entrance", "yes")], 6291),
    rule("college of further education / higher education", &[("amenity", "school"), ("isced:level", "4")], 6277),
    rule("cegep", &[("amenity", "school"), ("isced:level", "4")], 6277),
    rule("post-secondary education", &[("amenity", "school"), ("isced:level", "4")], 6277),
    rule("tertiary education", &[("amenity", "school"), ("isced:level", "5")], 6277),
    rule("town district", &[("place", "suburb")], 6245),
    rule("city district", &[("place", "suburb")], 6245),
    rule("detached house", &[("building", "detached")], 6238),
    rule("cape (geography)", &[("natural", "cape")], 6224),
    rule("entertainment attraction / ride", &[("tourism", "attraction")], 6223),
    rule("district heating substation", &[("building", "industrial"), ("product", "heating_steam_and/or_water")], 6200),
    rule("advertising", &[("advertising", "yes")], 6190),
    rule("veterinarian", &[("amenity", "veterinary")], 6180),
    rule("veterinary  clinic / surgery", &[("amenity", "veterinary")], 6180),
    rule("animal hospital", &[("amenity", "veterinary")], 6180),
    rule("19th century construction", &[("historic:period", "19th_century_construction")], 6178),
    rule("ice cream parlor", &[("amenity", "ice_cream")], 6158),
    rule("frozen yogurt shop", &[("amenity", "ice_cream")], 6158),
    rule("gelato parlor", &[("amenity", "ice_cream")], 6158),
    rule("housing services", &[("office", "housing_services")], 6147),
    rule("1950s construction", &[("historic:period", "1950s_construction")], 6039),
    rule("farmhouse", &[("building", "farm")], 6003),
    rule("bunker", &[("military", "bunker")], 5992),
    rule("water well", &[("man_made", "water_well")], 5947),
    rule("artesian well", &[("man_made", "water_well"), ("well:type", "artesian")], 5947),
    rule("viewpoint", &[("tourism", "viewpoint")], 5939),
    rule("panoramic view", &[("tourism", "viewpoint")], 5939),
    rule("travel plaza", &[("highway", "services")], 5917),
    rule("service area", &[("highway", "services")], 5917),
    rule("rest stop", &[("highway", "rest_area")], 5917),
    rule("motorway service area", &[("highway", "services")], 5917),
    rule("rest area", &[("highway", "rest_area")], 5917),
    rule("computers", &[("rawWmCategory", "computers")], 5916),
    rule("computer", &[("rawWmCategory", "computer")], 5916),
    rule("wholesale business", &[("whop", "wholesale")], 5913),
    rule("wholesalers", &[("shop", "wholesale")], 5913),
    rule("commercial", &[("building", "commercial")], 5890),
    rule("barracks", &[("military", "barracks")], 5866),
    rule("public vehicle depot", &[("landuse", "depot")], 5840),
    rule("cars - to be replaced", &[("rawWmCategory", "cars_-_to_be_replaced")], 5793),
    rule("canal", &[("waterway", "canal")], 5779),
    rule("healthcare", &[("amenity", "healthcare")], 5775),
    rule("scientific research institute / centre", &[("amenity", "research_institute")], 5743),
    rule("headquarters", &[("use", "headquarters")], 5727),
    rule("head office", &[("office", "yes"), ("use", "headquarters")], 5727),
    rule("main office", &[("office", "yes"), ("use", "headquarters")], 5727),
    rule("grave", &[("cemetery", "grave")], 5684),
    rule("amusement park", &[("tourism", "theme_park")], 5681),
    rule("theme park", &[("tourism", "theme_park")], 5681),
    rule("underground facility", &[("location", "underground"), ("facility", "yes")], 5651),
    rule("disaster", &[("rawWmCategory", "disaster")], 5583),
    rule("construction site", &[("landuse", "construction")], 5580),
    rule("tomb", &[("historic", "tomb")], 5579),
    rule("rocks", &[("natural", "rocks")], 5578),
    rule("forest belt", &[("natural", "forest_belt")], 5496),
    rule("stairs", &[("highway", "steps")], 5486),
    rule("spa", &[("amenity", "spa")], 5485),
    rule("radio tower", &[("man_made", "tower"), ("communication:radio", "yes")], 5456),
    rule("Jehovah's Witnesses", &[("religion", "christian"), ("denomination", "jehovahs_witness")], 5442),
    rule("war cemetery", &[("landuse", "cemetery"), ("cemetery", "war_cemetery")], 5425),
    rule("office", &[("office", "yes")], 5410),
    rule("landmark", &[("landmark", "yes")], 5410),
    rule("landmarks", &[("landmark", "yes")], 5410),
    rule("water tank", &[("man_made", "water_tank")], 5408),
    rule("1980s construction", &[("historic:period", "1980s_construction")], 5304),
    rule("art museum / art gallery", &[("tourism", "gallery")], 5255),
    rule("portrait gallery", &[("tourism", "gallery")], 5255),
    rule("coffee - to be replaced", &[("rawWmCategory", "coffee_-_to_be_replaced")], 5238),
    rule("public institution", &[("landuse", "institutional")], 5232),
    rule("neighbourhood development", &[("landuse", "neighbourhood_development")], 5221),
    rule("nuraghe", &[("historic", "archaeological_site"), ("site_type", "megalith"), ("megalith_type", "nuraghe")], 5191),
    rule("wedding / marriage garden", &[("leisure", "garden"), ("wedding", "yes")], 5188),
    rule("matrimonial hall / venue", &[("amenity", "events_venue")], 5188),
    rule("wedding / marriage venue", &[("amenity", "events_venue")], 5188),
    rule("wedding / marriage hall", &[("amenity", "events_venue")], 5188),
    rule("ship", &[("rawWmCategory", "ship")], 5150),
    rule("boat", &[("rawWmCategory", "boat")], 5134),
    rule("open-air swimming pool", &[("leisure", "swimming_pool")], 5130),
    rule("outdoor swimming pool", &[("leisure", "swimming_pool")], 5130),
    rule("recycling centre / collection", &[("amenity", "recycling")], 5107),
    rule("branch office of Jehovah's Witnesses", &[("amenity", "place_of_worship"), ("religion", "christian"), ("denomination", "jehovahs_witness")], 5098),
    rule("Kingdom Hall of Jehovah's Witnesses", &[("amenity", "place_of_worship"), ("religion", "christian"), ("denomination", "jehovahs_witness")], 5098),
    rule("assembly hall of Jehovah's Witnesses", &[("amenity", "place_of_worship"), ("religion", "christian"), ("denomination", "jehovahs_witness")], 5098),
    rule("gift shop", &[("shop", "gift")], 5080),
    rule("souvenir shop", &[("shop", "gift")], 5080),
    rule("cottage complex", &[("place", "allotments")], 5076),
    rule("brickworks", &[("industrial", "brickworks")], 5072),
    rule("brick factory", &[("industrial", "brickworks")], 5072),
    rule("brick kiln", &[("man_made", "kiln")], 5072),
    rule("brickyard", &[("industrial", "brickyard")], 5072),
    rule("lawyer", &[("office", "lawyer")], 5048),
    rule("attorney", &[("office", "lawyer")], 5048),
    rule("attorneys", &[("office", "lawyer")], 5048),
    rule("solicitors", &[("office", "lawyer")], 5048),
    rule("law firm", &[("office", "lawyer")], 5048),
    rule("telephone kiosk", &[("building", "kiosk"), ("amenity", "telephone")], 5019),
    rule("phone box", &[("amenity", "telephone")], 5019),
    rule("public telephone", &[("amenity", "telephone")], 5019),
    rule("payphone", &[("amenity", "telephone")], 5019),
    rule("phone booth", &[("amenity", "telephone")], 5019),
    rule("management", &[("amenity", "management")], 5012),
    rule("optician", &[("shop", "optician")], 4996),
    rule("spectacles", &[("shop", "optician")], 4996),
    rule("contact lens store", &[("shop", "optician")], 4996),
    rule("optical retailer", &[("shop", "optician")], 4996),
    rule("eye care shop", &[("shop", "optician")], 4996),
    rule("border", &[("border", "yes")], 4977),
    rule("doctor", &[("amenity", "doctors")], 4976),
    rule("tourism", &[("tourism", "yes")], 4969),
    rule("unincorporated area / community", &[("place", "unincorporated_area")], 4955),
    rule("open 24 hours", &[("opening_houes", "24/7")], 4951),
    rule("telephone exchange building", &[("man_made", "telephone_exchange")], 4943),
    rule("charitable organization", &[("office", "charity")], 4914),
    rule("charitable organisation", &[("office", "charity")], 4914),
    rule("social club", &[("leisure", "club")], 4907),
    rule("strip mall", &[("shop", "mall")], 4902),
    rule("Électricité de France", &[("rawWmCategory", "Électricité_de_France")], 4902),
    rule("shopping plaza", &[("landuse", "plaza")], 4902),
    rule("mini-mall", &[("shop", "mall")], 4902),
    rule("gun emplacement", &[("military", "gun_emplacement")], 4901),
    rule("helipad", &[("aeroway", "helipad")], 4874),
    rule("helicopter landing pad", &[("aeroway", "helipad")], 4874),
    rule("reef", &[("natural", "reef")], 4866),
    rule("manufacturing", &[("industrial", "manufacturing")], 4862),
    rule("manufacturer", &[("industrial", "manufacturing")], 4862),
    rule("destroyed", &[("condition", "destroyed")], 4838),
    rule("Baptist church", &[("religion", "christian"), ("denomination", "baptist")], 4810),
    rule("extreme / adventure sport", &[("tourism", "outdoor_adventure")], 4810),
    rule("ranch", &[("landuse", "farmland")], 4775),
    rule("heliport", &[("aeroway", "heliport")], 4774),
    rule("pillbox", &[("military", "bunker"), ("bunker_type", "pillbox")], 4768),
    rule("used car dealer / dealership", &[("shop", "car")], 4753),
    rule("cricket oval", &[("leisure", "pitch"), ("sport", "cricket")], 4693),
    rule("cricket field", &[("leisure", "pitch"), ("sport", "cricket")], 4693),
    rule("cricket ground", &[("leisure", "pitch"), ("sport", "cricket")], 4693),
    rule("plot - to be deleted", &[("rawWmCategory", "plot_-_to_be_deleted")], 4673),
    rule("electronic components", &[("shop", "electronics")], 4665),
    rule("electronics", &[("shop", "electronics")], 4665),
    rule("public housing estate", &[("landuse", "public_housing_estate")], 4645),
    rule("tree", &[("natural", "tree")], 4624),
    rule("horseback riding", &[("leisure", "equestrian")], 4602),
    rule("horse riding", &[("leisure", "equestrian")], 4602),
    rule("pavilion", &[("building", "pavilion")], 4602),
    rule("equitation", &[("leisure", "equestrian")], 4602),
    rule("equestrianism", &[("leisure", "equestrian")], 4602),
    rule("ordnance depot", &[("military", "ordnance_depot")], 4584),
    rule("arsenal / weapon and ammunition storage", &[("military", "ammunition")], 4584),
    rule("gas distribution station", &[("amenity", "gas_distribution_station")], 4559),
    rule("2000s construction", &[("historic:period", "2000s_construction")], 4558),
    rule("township", &[("place", "township")], 4553),
    rule("unfinished / unbuilt", &[("proposed", "yes")], 4506),
    rule("underpass", &[("underpass", "yes")], 4489),
    rule("marinas", &[("leisure", "marina")], 4485),
    rule("marina", &[("leisure", "marina")], 4485),
    rule("chocolatier", &[("shop", "confectionery")], 4467),
    rule("confectionery", &[("shop", "confectionery")], 4467),
    rule("sweets / sweet shop", &[("shop", "confectionery")], 4467),
    rule("candy shop", &[("shop", "confectionery")], 4467),
    rule("palm house", &[("building", "greenhouse"), ("product", "palm")], 4429),
    rule("greenhouse", &[("building", "greenhouse")], 4429),
    rule("glasshouse", &[("building", "greenhouse")], 4429),
    rule("berth", &[("seamark:type", "berth")], 4374),
    rule("radio station", &[("amenity", "radio")], 4370),
    rule("ventilating shaft", &[("man_made", "mineshaft"), ("mineshaft_type", "air")], 4366),
    rule("social security", &[("office", "social_security")], 4366),
    rule("pet shop/store", &[("shop", "pet")], 4364),
    rule("suburb", &[("place", "suburb")], 4360),
    rule("zoological garden", &[("tourism", "zoo")], 4353),
    rule("zoo", &[("tourism", "zoo")], 4353),
    rule("lutheranism", &[("religion", "christian"), ("denomination", "lutheran")], 4344),
    rule("mountain pass", &[("mountain_pass", "yes")], 4342),
    rule("navy", &[("military:service", "navy")], 4339),
    rule("toll booth", &[("barrier", "toll_booth")], 4331),
    rule("toll gate", &[("barrier", "toll_booth")], 4331),
    rule("closed", &[("rawWmCategory", "closed")], 4323),
    rule("civil defense facility", &[("military", "civil_defense_facility")], 4320),
    rule("civil protection", &[("amenity", "civil_protection")], 4320),
    rule("perfumes", &[("shop", "perfumery")], 4313),
    rule("perfume / cosmetics shop", &[("shop", "cosmetics")], 4313),
    rule("cosmetics", &[("shop", "cosmetics")], 4313),
    rule("cultural center / centre", &[("amenity", "arts_centre")], 4305),
    rule("driving school", &[("amenity", "driving_school")], 4274),
    rule("shipbuilding", &[("use", "ship_manufacturing")], 4272),
    rule("Mediterranean cuisine", &[("cuisine", "mediterranean")], 4258),
    rule("frazione", &[("place", "village")], 4254),
    rule("flower bed", &[("man_made", "flower_bed")], 4236),
    rule("barge slip", &[("amenity", "barge_slip")], 4233),
    rule("ferry terminal", &[("amenity", "ferry_terminal")], 4233),
    rule("ferry slip", &[("amenity", "ferry_slip")], 4233),
    rule("cavern", &[("natural", "cave_entrance")], 4230),
    rule("cave", &[("natural", "cave_entrance")], 4230),
    rule("aparthotel", &[("tourism", "apartment")], 4224),
    rule("apartment hotel / serviced apartment", &[("tourism", "apartment")], 4224),
    rule("apartelle", &[("tourism", "apartment")], 4224),
    rule("crash site", &[("place", "crash_site")], 4221),
    rule("sanatorium", &[("amenity", "sanatorium")], 4220),
    rule("computer services", &[("amenity", "computer_services")], 4210),
    rule("ministry / government department", &[("office", "government")], 4200),
    rule("hypermarket", &[("shop", "hypermarket")], 4169),
    rule("superstore", &[("shop", "hypermarket")], 4169),
    rule("megastore", &[("shop", "hypermarket")], 4169),
    rule("supercenter", &[("shop", "hypermarket")], 4169),
    rule("big-box store", &[("shop", "hypermarket")], 4169),
    rule("butcher's shop", &[("shop", "butcher")], 4168),
    rule("butcher shop / butchery", &[("shop", "butcher")], 4168),
    rule("department", &[("rawWmCategory", "department")], 4165),
    rule("christian school", &[("amenity", "school"), ("religion", "christian")], 4128),
    rule("hydroelectric power station", &[("power", "generator"), ("generator:source", "hydro")], 4120),
    rule("gully", &[("natural", "gully")], 4091),
    rule("baseball field", &[("leisure", "pitch"), ("sport", "baseball")], 4090),
    rule("Walmart", &[("shop", "department_store"), ("name", "Walmart")], 4086),
    rule("Wal-mart", &[("shop", "department_store"), ("name", "Walmart")], 4086),
    rule("jewellery store/shop", &[("shop", "jewelry")], 4082),
    rule("jewelry store/shop", &[("shop", "jewelry")], 4082),
    rule("lock (water transport)", &[("lock", "yes")], 4028),
    rule("aircraft shelter", &[("aeroway", "aircraft_shelter")], 4010),
    rule("aircraft hangar", &[("aeroway", "hangar")], 4010),
    rule("sector", &[("place", "sector")], 4005),
    rule("coal industry", &[("landuse", "industrial"), ("product", "coal")], 3995),
    rule("interstate", &[("highway", "motorway")], 3981),
    rule("1990s construction", &[("historic:period", "1990s_construction")], 3968),
    rule("photographic studio", &[("craft", "photographer")], 3953),
    rule("Japanese cuisine", &[("cuisine", "japanese")], 3936),
    rule("volleyball court", &[("leisure", "pitch"), ("sport", "volleyball")], 3936),
    rule("pier", &[("man_made", "pier")], 3933),
    rule("Lutheran Church", &[("building", "church"), ("amenity", "place_of_worship"), ("religion", "christian"), ("denomination", "lutheran")], 3931),
    rule("eid prayer ground", &[("amenity", "place_of_worship"), ("religion", "muslim"), ("eidgah", "yes")], 3928),
    rule("eidgah", &[("amenity", "place_of_worship"), ("religion", "muslim"), ("eidgah", "yes")], 3928),
    rule("laundromat", &[("shop", "laundry")], 3910),
    rule("laundry", &[("shop", "laundry")], 3910),
    rule("laundrette", &[("shop", "laundry")], 3910),
    rule("toy shop", &[("shop", "toy")], 3893),
    rule("bungalow", &[("building", "bungalow")], 3882),
    rule("association", &[("rawWmCategory", "association")], 3866),
    rule("engineering", &[("rawWmCategory", "engineering")], 3865),
    rule("vehicle inspection", &[("amenity", "vehicle_inspection")], 3864),
    rule("valley", &[("natural", "valley")], 3863),
    rule("summer camp", &[("leisure", "summer_camp")], 3853),
    rule("river mouth", &[("waterway", "river_mouth")], 3851),
    rule("estuary", &[("estuary", "yes")], 3851),
    rule("lodge", &[("tourism", "motel")], 3824),
    rule("professional sports leagues", &[("rawWmCategory", "professional_sports_leagues")], 3803),
    rule("antenna", &[("man_made", "antenna")], 3791),
    rule("retirement home", &[("amenity", "retirement_home")], 3790),
    rule("senior citizen home", &[("amenity", "retirement_home")], 3790),
    rule("ICBM launch facility", &[("missile", "intercontinental_ballistic_missile"), ("launch_pad", "yes")], 3784),
    rule("missile launch facility", &[("launch_pad", "yes")], 3784),
    rule("missile silo", &[("missile_silo", "yes")], 3784),
    rule("churchyard", &[("landuse", "churchyard")], 3775),
    rule("[oil and gas companies]", &[("office", "oil_and_gas")], 3760),
    rule("cattle ranch", &[("landuse", "farmland"), ("produce", "cattle")], 3746),
    rule("cattle farm", &[("landuse", "farmland"), ("produce", "cattle")], 3746),
    rule("camp", &[("tourism", "camp_site")], 3742),
    rule("bottle bank", &[("amenity", "recycling"), ("recycling:glass_bottles", "yes")], 3737),
    rule("waste collection point / civic amenity centre / drop-off centre", &[("amenity", "waste_transfer_station")], 3737),
    rule("railway company", &[("office", "railway")], 3733),
    rule("railway operator", &[("office", "railway")], 3733),
    rule("care home", &[("amenity", "nursing_home")], 3730),
    rule("nursing home", &[("amenity", "nursing_home")], 3730),
    rule("alternative medicine", &[("healthcare", "alternative")], 3728),
    rule("bus depot", &[("landuse", "depot"), ("bus", "yes")], 3719),
    rule("bus garage", &[("building", "garage"), ("bus", "yes")], 3719),
    rule("ice arena", &[("leisure", "ice_rink")], 3707),
    rule("ice skating rink", &[("leisure", "ice_rink")], 3707),
    rule("ice hockey rink", &[("leisure", "ice_rink"), ("sport", "ice_hockey")], 3707),
    rule("ice rink", &[("leisure", "ice_rink")], 3707),
    rule("mound", &[("natural", "mound")], 3678),
    rule("outbuilding", &[("building", "outbuilding")], 3667),
    rule("cross", &[("rawWmCategory", "cross")], 3665),
    rule("wall", &[("barrier", "wall")], 3650),
    rule("newspaper publisher", &[("office", "newspaper")], 3644),
    rule("bake shop", &[("shop", "bakery")], 3640),
    rule("patisserie", &[("shop", "pastry")], 3640),
    rule("pastry shop", &[("shop", "pastry")], 3640),
    rule("printing", &[("amenity", "printing")], 3636),
    rule("domestic dogs", &[("rawWmCategory", "domestic_dogs")], 3628),
    rule("border guard", &[("barrier", "border"), ("guard", "yes")], 3623),
    rule("landfill site", &[("landuse", "landfill")], 3618),
    rule("volcano", &[("natural", "volcano")], 3617),
    rule("gazebo", &[("building", "gazebo")], 3614),
    rule("heritage", &[("historic", "heritage")], 3606),
    rule("drive-in/ drive-through", &[("drive_through", "yes")], 3597),
    rule("Chinese cuisine", &[("cuisine", "chinese")], 3590),
    rule("drinking fountain", &[("amenity", "drinking_water")], 3585),
    rule("water pump", &[("man_made", "water_pump")], 3585),
    rule("civil parish", &[("place", "parish")], 3582),
    rule("parish", &[("place", "parish")], 3582),
    rule("TV", &[("rawWmCategory", "TV")], 3582),
    rule("television", &[("rawWmCategory", "television")], 3582),
    rule("training center", &[("amenity", "training")], 3571),
    rule("training centre", &[("amenity", "training")], 3571),
    rule("snack bar / concession stand", &[("amenity", "fast_food")], 3553),
    rule("CDP - Census Designated Place", &[("place", "census_designated_place")], 3549),
    rule("highway patrol", &[("amenity", "police"), ("police", "highway_patrol")], 3546),
    rule("traffic police", &[("amenity", "police"), ("police", "traffic_police")], 3546),
    rule("grain elevator / grain silos", &[("man_made", "silo")], 3528),
    rule("billboard", &[("advertising", "billboard")], 3517),
    rule("music school", &[("amenity", "music_school")], 3495),
    rule("shrine", &[("amenity", "place_of_worship"), ("building", "shrine")], 3488),
    rule("Shiv / Mahadev mandir", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 3480),
    rule("Shankar temple", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 3480),
    rule("Sivalayam", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 3480),
    rule("Shiva temple", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 3480),
    rule("2010s construction", &[("historic:period", "2010s_construction")], 3462),
    rule("electricity - to be replaced / deleted", &[("rawWmCategory", "electricity_-_to_be_replaced_/_deleted")], 3445),
    rule("demolished", &[("demolished", "yes")], 3443),
    rule("computer shop", &[("shop", "computer")], 3440),
    rule("orchard / fruit garden", &[("landuse", "orchard")], 3436),
    rule("fruit farm", &[("landuse", "orchard")], 3436),
    rule("second-level administrative division", &[("boundary", "administrative"), ("admin_level", "2")], 3429),
    rule("boarding school", &[("amenity", "school"), ("boarding", "yes")], 3411),
    rule("hall (Don't use this category, instead help removing it by refining)", &[("rawWmCategory", "hall_(Dont_use_this_category,_instead_help_removing_it_by_refining)")], 3402),
    rule("quarry pond", &[("natural", "water"), ("water", "pond")], 3389),
    rule("evangelicalism", &[("religion", "christian"), ("denomination", "evangelical")], 3384),
    rule("well_(do not use this category)", &[("rawWmCategory", "well_(do_not_use_this_category)")], 3370),
    rule("geodesy", &[("geodetic", "yes")], 3359),
    rule("geodetic point", &[("man_made", "survey_point")], 3359),
    rule("research", &[("amenity", "research")], 3358),
    rule("dump", &[("landuse", "landfill")], 3356),
    rule("dacha", &[("building", "bungalow")], 3354),
    rule("cathedral", &[("amenity", "place_of_worship"), ("building", "cathedral")], 3340),
    rule("arts centre", &[("amenity", "arts_centre")], 3299),
    rule("arts center", &[("amenity", "arts_centre")], 3299),
    rule("poultry farm", &[("landuse", "farmland"), ("produce", "poultry")], 3292),
    rule("poultry farming", &[("landuse", "farmland"), ("produce", "poultry")], 3292),
    rule("stationers", &[("shop", "stationery")], 3291),
    rule("stationery store / shop", &[("shop", "stationery")], 3291),
    rule("service center", &[("amenity", "service_centre")], 3283),
    rule("chowk (town square)", &[("landuse", "square")], 3272),
    rule("town square", &[("landuse", "square")], 3272),
    rule("townhouses", &[("building", "terrace")], 3263),
    rule("townhomes", &[("building", "terrace")], 3263),
    rule("distribution center", &[("building", "warehouse")], 3262),
    rule("distribution centre", &[("building", "warehouse")], 3262),
    rule("distributor", &[("rawWmCategory", "distributor")], 3262),
    rule("architecture - Do not use this category", &[("rawWmCategory", "architecture_-_Do_not_use_this_category")], 3256),
    rule("boarding house", &[("tourism", "guest_house")], 3252),
    rule("bell chair", &[("rawWmCategory", "bell_chair")], 3230),
    rule("bell tower", &[("man_made", "tower"), ("tower:type", "bell_tower")], 3230),
    rule("belfry", &[("man_made", "tower"), ("tower:type", "bell_tower"), ("bell_tower", "belfry")], 3230),
    rule("shanty town", &[("place", "shanty_town")], 3203),
    rule("slum", &[("place", "slum")], 3203),
    rule("lagoon", &[("water", "lagoon")], 3179),
    rule("Maginot line", &[("historic", "Maginot_line")], 3151),
    rule("entertainment", &[("amenity", "entertainment")], 3147),
    rule("vineyard / grape plantation", &[("landuse", "vineyard")], 3139),
    rule("judaism", &[("religion", "jewish")], 3093),
    rule("station building (railway)", &[("building", "train_station")], 3091),
    rule("head house (train station)", &[("building", "train_station")], 3091),
    rule("cab rank", &[("amenity", "taxi")], 3090),
    rule("taxi rank", &[("amenity", "taxi")], 3090),
    rule("taxi stop", &[("amenity", "taxi")], 3090),
    rule("hack stand", &[("amenity", "taxi")], 3090),
    rule("cab stand", &[("amenity", "taxi")], 3090),
    rule("taxicab stand", &[("amenity", "taxi")], 3090),
    rule("taxi stand", &[("amenity", "taxi")], 3090),
    rule("lawn", &[("landuse", "grass")], 3087),
    rule("geography", &[("rawWmCategory", "geography")], 3075),
    rule("geographical", &[("rawWmCategory", "geographical")], 3075),
    rule("golf hole", &[("leisure", "golf_course"), ("golf", "hole")], 3043),
    rule("Mexican cuisine", &[("cuisine", "mexican")], 3040),
    rule("viaduct (bridge construction style)", &[("bridge", "viaduct")], 3025),
    rule("internet company", &[("office", "internet_company")], 3020),
    rule("sports school", &[("amenity", "school"), ("sports", "yes")], 3011),
    rule("ancient ruins", &[("historic", "ruins")], 3000),
    rule("historic ruins", &[("historic", "ruins")], 3000),
    rule("ambulance station", &[("emergency", "ambulance_station")], 2997),
    rule("ship wreck", &[("historic", "wreck")], 2986),
    rule("shipwreck", &[("historic", "wreck")], 2986),
    rule("classroom", &[("amenity", "school"), ("building", "school")], 2982),
    rule("classrooms", &[("amenity", "school"), ("building", "school")], 2982),
    rule("Catholic school", &[("amenity", "school"), ("religion", "catholic")], 2965),
    rule("futsal court", &[("leisure", "pitch"), ("sport", "futsal")], 2963),
    rule("tourist information board", &[("tourism", "information"), ("information", "board")], 2945),
    rule("tourist information centre/center", &[("tourism", "information"), ("information", "office")], 2945),
    rule("Italian cuisine", &[("cuisine", "italian")], 2943),
    rule("cargo transportation", &[("use", "cargo_handling")], 2915),
    rule("premises", &[("rawWmCategory", "premises")], 2913),
    rule("taxiway", &[("aeroway", "taxiway")], 2911),
    rule("fallout shelter", &[("amenity", "shelter"), ("shelter:type", "fallout")], 2904),
    rule("bombshelter", &[("amenity", "shelter"), ("shelter:type", "bomb")], 2904),
    rule("country club", &[("leisure", "club"), ("club", "country")], 2900),
    rule("ticket / box office", &[("shop", "ticket")], 2899),
    rule("Sberbank", &[("amenity", "bank"), ("name", "Sberbank")], 2895),
    rule("barn", &[("building", "barn")], 2889),
    rule("pawnshop / pawnbroker", &[("shop", "pawnbroker")], 2884),
    rule("airport terminal", &[("aeroway", "terminal")], 2883),
    rule("motorcycle dealer / shop", &[("shop", "motorcycle")], 2873),
    rule("picnic area", &[("tourism", "picnic_site")], 2873),
    rule("camera shop", &[("shop", "camera")], 2864),
    rule("photography shop", &[("shop", "photo")], 2864),
    rule("garden center", &[("shop", "garden_centre")], 2861),
    rule("garden centre", &[("shop", "garden_centre")], 2861),
    rule("non-profit organisation", &[("office", "association")], 2856),
    rule("non-profit organization", &[("office", "association")], 2856),
    rule("accommodation", &[("amenity", "accommodation")], 2854),
    rule("closed - military", &[("access", "no")], 2849),
    rule("consultation", &[("office", "consultant")], 2841),
    rule("consultancy", &[("office", "consultant")], 2841),
    rule("consulting", &[("office", "consultant")], 2841),
    rule("silo (structure for storing bulk materials)", &[("man_made", "silo")], 2837),
    rule("bowling alley", &[("leisure", "bowling_alley")], 2820),
    rule("bowling lanes", &[("leisure", "bowling_alley")], 2820),
    rule("bowling (pin)", &[("leisure", "bowling_alley")], 2820),
    rule("boliche", &[("sport", "bowling")], 2820),
    rule("water catchment area", &[("landuse", "basin")], 2810),
    rule("wind power plant", &[("power", "generator"), ("generator:type", "wind")], 2767),
    rule("wind farm", &[("landuse", "wind_farm")], 2767),
    rule("fuel depot", &[("amenity", "fuel_storage")], 2760),
    rule("oil terminal", &[("man_made", "oil_terminal")], 2760),
    rule("oil depot", &[("man_made", "oil_depot")], 2760),
    rule("tank farm", &[("landuse", "tank_farm")], 2760),
    rule("[military base]", &[("landuse", "military")], 2758),
    rule("base level", &[("rawWmCategory", "base_level")], 2758),
    rule("windmill", &[("man_made", "windmill")], 2756),
    rule("non-ministerial government department (UK)", &[("office", "government")], 2752),
    rule("convention center", &[("amenity", "convention_centre")], 2750),
    rule("convention centre", &[("amenity", "convention_centre")], 2750),
    rule("congress centre", &[("amenity", "convention_centre")], 2750),
    rule("conference centre", &[("amenity", "conference_centre")], 2750),
    rule("water purification plant", &[("man_made", "water_works")], 2747),
    rule("water supply treatment plant", &[("man_made", "water_works")], 2747),
    rule("cooling tower", &[("man_made", "tower"), ("tower:type", "cooling")], 2744),
    rule("HM revenue and customs (UK)", &[("amenity", "customs")], 2742),
    rule("internal revenue service", &[("office", "tax")], 2742),
    rule("tax authority", &[("office", "tax")], 2742),
    rule("sauna", &[("leisure", "sauna")], 2732),
    rule("village hall", &[("amenity", "townhall"), ("townhall:type", "village")], 2709),
    rule("[hotel chains]", &[("tourism", "hotel")], 2699),
    rule("ford (river crossing)", &[("ford", "yes")], 2693),
    rule("auditorium", &[("amenity", "auditorium")], 2688),
    rule("compound", &[("rawWmCategory", "compound")], 2683),
    rule("local events", &[("rawWmCategory", "local_events")], 2674),
    rule("winery", &[("man_made", "winery")], 2672),
    rule("atelier", &[("building", "workshop")], 2662),
    rule("mini storage", &[("shop", "storage_rental")], 2661),
    rule("self storage", &[("shop", "storage_rental")], 2661),
    rule("chemical industry", &[("landuse", "industrial"), ("industrial", "chemical")], 2657),
    rule("nursery", &[("rawWmCategory", "nursery")], 2657),
    rule("snooker hall / room / club / parlour", &[("sport", "billiards")], 2655),
    rule("pool hall / room / parlor / club", &[("sport", "billiards")], 2655),
    rule("billiard hall / room / club / parlour", &[("sport", "billiards")], 2655),
    rule("parking ramp", &[("amenity", "parking")], 2653),
    rule("parking garage", &[("amenity", "parking")], 2653),
    rule("multi-storey car park", &[("amenity", "parking"), ("parking", "multi-storey")], 2653),
    rule("18th century construction", &[("historic:period", "18th_century_construction")], 2649),
    rule("employment / recruitment / jobs agency", &[("office", "employment_agency")], 2643),
    rule("staffing agency", &[("office", "employment_agency")], 2643),
    rule("brewery", &[("building", "brewery")], 2643),
    rule("private school", &[("amenity", "school"), ("private", "yes")], 2642),
    rule("nonstate school", &[("amenity", "school")], 2642),
    rule("independent school", &[("amenity", "school")], 2642),
    rule("school of arts and design / college of arts and design", &[("amenity", "school"), ("school", "art")], 2630),
    rule("cove", &[("natural", "cove")], 2597),
    rule("ski", &[("sport", "ski")], 2556),
    rule("height", &[("rawWmCategory", "height")], 2553),
    rule("home appliance store / shop", &[("shop", "houseware")], 2549),
    rule("rifle range", &[("sport", "firing_range")], 2532),
    rule("shooting range", &[("sport", "firing_range")], 2532),
    rule("firing range", &[("sport", "firing_range")], 2532),
    rule("Lenin", &[("rawWmCategory", "Lenin")], 2530),
    rule("bust (sculpture)", &[("tourism", "artwork"), ("artwork_type", "bust")], 2528),
    rule("surface-to-air missile site / sam", &[("missile", "surface-to-air_missile"), ("launch_pad", "yes")], 2517),
    rule("stone", &[("material", "stone")], 2505),
    rule("UNESCO World Heritage Site", &[("historic", "heritage"), ("heritage", "UNESCO_World_Heritage_Site")], 2504),
    rule("car hire agency", &[("amenity", "car_rental")], 2496),
    rule("automobile rental agency", &[("amenity", "car_rental")], 2496),
    rule("car rental agency", &[("amenity", "car_rental")], 2496),
    rule("rent-a-car agency", &[("amenity", "car_rental")], 2496),
    rule("high-rise", &[("building", "yes")], 2496),
    rule("haulage service", &[("amenity", "haulage")], 2482),
    rule("logistics", &[("rawWmCategory", "logistics")], 2482),
    rule("Islamic cemetery", &[("landuse", "cemetery"), ("religion", "muslim")], 2478),
    rule("Muslim cemetery", &[("landuse", "cemetery"), ("religion", "muslim")], 2478),
    rule("qabristan", &[("landu", "cemetery")], 2478),
    rule("furniture factory / maker", &[("building", "industrial"), ("use", "furniture_manufacturing")], 2452),
    rule("igloo", &[("building", "igloo")], 2441),
    rule("borough", &[("place", "borough")], 2435),
    rule("The district center", &[("amenity", "community_centre")], 2433),
    rule("adventure/activity centre", &[("leisure", "sports_centre")], 2431),
    rule("radar", &[("rawWmCategory", "radar")], 2425),
    rule("gents", &[("amenity", "toilets"), ("male", "yes")], 2424),
    rule("mens", &[("amenity", "toilets"), ("male", "yes")], 2424),
    rule("customs", &[("amenity", "customs")], 2419),
    rule("customs house / area / checkpoint", &[("amenity", "customs")], 2419),
    rule("traction and rolling stock maintenance depot", &[("repair", "railway_vehicle")], 2404),
    rule("traction maintenance depot (TMD)", &[("repair", "railway_vehicle")], 2404),
    rule("railway depot", &[("landuse", "railway"), ("railway", "depot")], 2404),
    rule("motive power depot (MPD)", &[("landuse", "railway"), ("railway", "depot")], 2404),
    rule("expocentre", &[("amenity", "exhibition_centre")], 2404),
    rule("locomotive depot", &[("landuse", "railway"), ("railway", "depot")], 2404),
    rule("exhibition center", &[("amenity", "exhibition_centre")], 2404),
    rule("exhibition centre", &[("amenity", "exhibition_centre")], 2404),
    rule("oxbow lake", &[("natural", "water"), ("water", "oxbow")], 2403),
    rule("sandpit (quarry)", &[("landuse", "quarry"), ("resource", "sand")], 2395),
    rule("hut", &[("building", "hut")], 2390),
    rule("Roman Empire", &[("historic:period", "Roman_Empire")], 2389),
    rule("romans", &[("historic:period", "Roman_Empire")], 2389),
    rule("seafood restaurant", &[("cuisine", "seafood")], 2388),
    rule("[air force]", &[("military:service", "air_force")], 2387),
    rule("armoured fighting vehicle on display", &[("historic", "armoured_fighting_vehicle")], 2387),
    rule("tank on display", &[("historic", "tank")], 2387),
    rule("radio", &[("rawWmCategory", "radio")], 2386),
    rule("orphan asylum", &[("amenity", "social_facility"), ("social_facility:for", "orphan")], 2385),
    rule("orphanage", &[("amenity", "social_facility"), ("social_facility:for", "orphan")], 2385),
    rule("geology", &[("rawWmCategory", "geology")], 2370),
    rule("dry cleaner", &[("shop", "dry_cleaning")], 2367),
    rule("dry cleaning", &[("shop", "dry_cleaning")], 2367),
    rule("municipal", &[("rawWmCategory", "municipal")], 2367),
    rule("language school", &[("amenity", "school"), ("school", "language")], 2363),
    rule("solar farm", &[("power", "plant"), ("generator:source", "solar")], 2360),
    rule("photovoltaic power station", &[("power", "plant"), ("generator:source", "solar")], 2360),
    rule("solar park", &[("power", "plant"), ("generator:source", "solar")], 2360),
    rule("river rapid / white water", &[("waterway", "rapids")], 2352),
    rule("secondhand shop", &[("shop", "second_hand")], 2344),
    rule("advertising agency", &[("office", "advertising_agency")], 2343),
    rule("solar energy", &[("rawWmCategory", "solar_energy")], 2342),
    rule("agricultural equipment", &[("rawWmCategory", "agricultural_equipment")], 2333),
    rule("pipeline", &[("man_made", "pipeline")], 2327),
    rule("metallurgy", &[("rawWmCategory", "metallurgy")], 2326),
    rule("dangerous place / area", &[("rawWmCategory", "dangerous_place_/_area")], 2325),
    rule("air force base", &[("military", "installation"), ("military:service", "air_force")], 2323),
    rule("military airbase", &[("military", "installation"), ("military:service", "air_force")], 2323),
    rule("weather / meteorological station", &[("man_made", "monitoring_station"), ("monitoring:weather", "yes")], 2316),
    rule("doctors clinic", &[("amenity", "doctors")], 2314),
    rule("doctors office", &[("amenity", "doctors")], 2314),
    rule("doctors surgery", &[("amenity", "doctors")], 2314),
    rule("general practice / surgery", &[("amenity", "doctors")], 2314),
    rule("levee", &[("man_made", "dyke")], 2309),
    rule("dike", &[("man_made", "dyke")], 2309),
    rule("information technology", &[("rawWmCategory", "information_technology")], 2308),
    rule("tourist attraction", &[("tourism", "attraction")], 2307),
    rule("sawmill", &[("craft", "sawmill")], 2304),
    rule("currency exchange", &[("amenity", "bureau_de_change")], 2293),
    rule("bureau de change", &[("amenity", "bureau_de_change")], 2293),
    rule("money exchange", &[("amenity", "bureau_de_change")], 2293),
    rule("trail", &[("highway", "trail")], 2292),
    rule("Burger King", &[("amenity", "fast_food"), ("cuisine", "burger"), ("name", "Burger King"), ("brand", "Burger King")], 2290),
    rule("county seat", &[("place", "county_seat")], 2289),
    rule("interlocking", &[("rawWmCategory", "interlocking")], 2288),
    rule("cafeteria", &[("amenity", "fast_food"), ("fast_food", "cafeteria")], 2286),
    rule("Magnit (store)", &[("shop", "supermarket"), ("name", "Magnit")], 2285),
    rule("undertaker", &[("shop", "funeral_directors")], 2280),
    rule("casino", &[("amenity", "casino")], 2280),
    rule("funeral parlor", &[("shop", "funeral_directors")], 2280),
    rule("funeral home", &[("shop", "funeral_directors")], 2280),
    rule("mortuary / funeral home", &[("shop", "funeral_directors")], 2280),
    rule("funeral director", &[("shop", "funeral_directors")], 2280),
    rule("auto racing", &[("sport", "motor")], 2276),
    rule("car racing", &[("sport", "motor")], 2276),
    rule("newsagent&#039;s shop / newsagency / newsstand", &[("shop", "newsagent")], 2268),
    rule("ranger station", &[("amenity", "ranger_station")], 2253),
    rule("autogas (LPG, propane) refuelling station", &[("amenity", "fuel"), ("fuel:lpg", "yes")], 2243),
    rule("notary", &[("office", "lawyer"), ("lawyer", "notary")], 2242),
    rule("horticulture", &[("amenity", "horticulture")], 2238),
    rule("railway stop", &[("public_transport", "stop_position"), ("train", "yes")], 2237),
    rule("woodworking", &[("craft", "carpenter")], 2236),
    rule("glade", &[("natural", "glade")], 2235),
    rule("1930s construction", &[("historic:period", "1930s_construction")], 2227),
    rule("gated community", &[("landuse", "residential"), ("residential", "gated")], 2212),
    rule("KFC", &[("amenity", "fast_food"), ("cuisine", "chicken"), ("name", "KFC"), ("brand", "KFC")], 2209),
    rule("Kentucky Fried Chicken", &[("amenity", "fast_food"), ("cuisine", "chicken"), ("name", "KFC"), ("brand", "KFC")], 2209),
    rule("special needs school", &[("amenity", "school"), ("school", "special_needs")], 2201),
    rule("school for the disabled", &[("amenity", "school"), ("school", "special_needs")], 2201),
    rule("special needs education", &[("amenity", "school"), ("school", "special_needs")], 2201),
    rule("milk processing factory", &[("building", "industrial"), ("product", "milk")], 2198),
    rule("dairy processing plant", &[("building", "industrial"), ("product", "dairy")], 2198),
    rule("historic district", &[("historic", "district")], 2188),
    rule("television broadcast station", &[("amenity", "studio"), ("studio", "television")], 2183),
    rule("parade ground", &[("military", "parade_ground")], 2175),
    rule("cooperative", &[("rawWmCategory", "cooperative")], 2174),
    rule("county", &[("place", "county")], 2173),
    rule("skyscraper", &[("building", "yes")], 2170),
    rule("watch-tower", &[("man_made", "tower"), ("tower:type", "observation")], 2150),
    rule("plantation", &[("landuse", "plantation")], 2146),
    rule("ancient", &[("historic:period", "ancient")], 2144),
    rule("glacier", &[("natural", "glacier")], 2141),
    rule("quarters - to be replaced", &[("rawWmCategory", "quarters_-_to_be_replaced")], 2139),
    rule("exit - to be deleted", &[("rawWmCategory", "exit_-_to_be_deleted")], 2138),
    rule("geoglyph", &[("man_made", "geoglyph")], 2136),
    rule("gold mine", &[("man_made", "mineshaft"), ("resource", "gold")], 2134),
    rule("civil registry office", &[("amenity", "register_office")], 2124),
    rule("railway terminus", &[("railway", "station")], 2114),
    rule("railway terminal", &[("railway", "station")], 2114),
    rule("psychiatry", &[("healthcare", "psychiatry")], 2110),
    rule("aquapark", &[("leisure", "water_park")], 2101),
    rule("sikhism", &[("religion", "sikh")], 2101),
    rule("water park", &[("amenity", "water_park")], 2101),
    rule("fire pond", &[("emergency", "fire_water_pond")], 2097),
    rule("loteamento", &[("place", "plot")], 2095),
    rule("Pentecostal Church", &[("religion", "christian"), ("denomination", "pentecostal")], 2085),
    rule("pentecostalism", &[("religion", "christian"), ("denomination", "pentecostal")], 2085),
    rule("warship", &[("rawWmCategory", "warship")], 2084),
    rule("video rental shop", &[("shop", "video")], 2084),
    rule("martial arts", &[("sport", "martial_arts")], 2074),
    rule("airport apron", &[("aeroway", "apron")], 2074),
    rule("exposition", &[("rawWmCategory", "exposition")], 2067),
    rule("aquaculture", &[("use", "aquaculture")], 2053),
    rule("downtown / central business district", &[("rawWmCategory", "downtown_/_central_business_district")], 2052),
    rule("coal mine", &[("man_made", "mineshaft"), ("resource", "coal")], 2052),
    rule("colliery", &[("man_made", "mineshaft"), ("resource", "coal")], 2052),
    rule("steakhouse", &[("amenity", "restaurant"), ("cuisine", "steak_house")], 2049),
    rule("tree farm", &[("landuse", "farmland"), ("produce", "tree")], 2045),
    rule("plant nursery", &[("landuse", "plant_nursery")], 2045),
    rule("crane", &[("man_made", "crane")], 2033),
    rule("madrasah", &[("amenity", "school"), ("religion", "muslim")], 2029),
    rule("madarsa", &[("amenity", "school"), ("religion", "muslim")], 2029),
    rule("storage tank", &[("man_made", "storage_tank")], 2024),
    rule("delicatessen", &[("shop", "deli")], 2024),
    rule("state government", &[("rawWmCategory", "state_government")], 2021),
    rule("degree confluence project - DCP", &[("rawWmCategory", "degree_confluence_project_-_DCP")], 2020),
    rule("foodservice", &[("shop", "catering")], 2019),
    rule("catering", &[("shop", "catering")], 2019),
    rule("caterer", &[("shop", "catering")], 2019),
    rule("caterers", &[("shop", "catering")], 2019),
    rule("Grade I Listed (UK)", &[("historic", "heritage"), ("designation", "Grade_I_Listed_(UK)")], 2017),
    rule("mining", &[("man_made", "mineshaft")], 2016),
    rule("non-governmental organization (NGO)", &[("office", "ngo")], 2015),
    rule("jetty", &[("man_made", "jetty")], 2007),
    rule("terrace", &[("building", "terrace")], 2003),
    rule("First World War 1914-1918", &[("historic:period", "First_World_War_1914-1918")], 2002),
    rule("railroad yard", &[("railway", "yard")], 1998),
    rule("hump retarder yard", &[("rawWmCategory", "hump_retarder_yard")], 1998),
    rule("railyard", &[("railway", "yard")], 1998),
    rule("hot spring", &[("natural", "hot_spring")], 1996),
    rule("salon", &[("shop", "beauty")], 1992),
    rule("fish pond", &[("natural", "water"), ("water", "pond"), ("fish", "yes")], 1984),
    rule("NDB - non-directional beacon", &[("navigationaid", "ndb")], 1984),
    rule("gurdwara", &[("amenity", "place_of_worship"), ("building", "temple"), ("religion", "sikh")], 1983),
    rule("gurudwara", &[("amenity", "place_of_worship"), ("building", "temple"), ("religion", "sikh")], 1983),
    rule("sikh temple", &[("amenity", "place_of_worship"), ("building", "temple"), ("religion", "sikh")], 1983),
    rule("high mast lighting", &[("rawWmCategory", "high_mast_lighting")], 1978),
    rule("home furnishing / interior decoration", &[("shop", "houseware")], 1973),
    rule("homeware retailer", &[("shop", "houseware")], 1973),
    rule("agritourism", &[("landuse", "farmland"), ("agritourism", "yes")], 1973),
    rule("procuratorate", &[("amenity", "procuratorate")], 1972),
    rule("control tower", &[("man_made", "control_tower")], 1964),
    rule("atc / air traffic control tower", &[("man_made", "control_tower")], 1964),
    rule("megalith", &[("historic", "archaeological_site"), ("site_type", "megalith")], 1963),
    rule("funeral services", &[("shop", "funeral_directors")], 1956),
    rule("saline lake", &[("natural", "water"), ("water", "lake"), ("salt", "yes")], 1955),
    rule("salt lake", &[("natural", "water"), ("water", "lake"), ("salt", "yes")], 1955),
    rule("showroom", &[("showroom", "yes")], 1954),
    rule("department of engineering education", &[("amenity", "school"), ("school", "engineering")], 1947),
    rule("college of engineering", &[("amenity", "college"), ("college", "engineering")], 1947),
    rule("To be deleted", &[("rawWmCategory", "To_be_deleted")], 1940),
    rule("women's clothing store", &[("shop", "clothes"), ("clothes", "women")], 1915),
    rule("medical laboratory", &[("building", "laboratory")], 1915),
    rule("clinical laboratory", &[("building", "laboratory")], 1915),
    rule("dockyard", &[("waterway", "dock")], 1914),
    rule("shipbuilding hall", &[("building", "shipbuilding")], 1914),
    rule("shipyard", &[("amenity", "shipyard")], 1914),
    rule("extreme skating ramp", &[("leisure", "pitch"), ("sport", "skateboard"), ("surface", "concrete")], 1909),
    rule("skateboard park", &[("leisure", "pitch"), ("sport", "skateboard"), ("surface", "concrete")], 1909),
    rule("half-pipe", &[("leisure", "pitch"), ("sport", "skateboard"), ("surface", "concrete")], 1909),
    rule("skatepark", &[("leisure", "pitch"), ("sport", "skateboard"), ("surface", "concrete")], 1909),
    rule("forest break", &[("rawWmCategory", "forest_break")], 1901),
    rule("sewage lift station", &[("man_made", "sewage_lift")], 1900),
    rule("sewage pumping station", &[("man_made", "pumping_station"), ("sewage", "yes")], 1900),
    rule("wastewater pumping station", &[("man_made", "pumping_station"), ("wastewater", "yes")], 1900),
    rule("shooting", &[("sport", "shooting")], 1896),
    rule("musholla", &[("amenity", "place_of_worship"), ("religion", "muslim")], 1893),
    rule("border crossing", &[("barrier", "border_control")], 1892),
    rule("Starbucks", &[("amenity", "restaurant"), ("cuisine", "coffee_shop"), ("name", "Starbucks"), ("brand", "Starbucks")], 1892),
    rule("border checkpoint", &[("barrier", "border_control")], 1892),
    rule("Indian cuisine", &[("cuisine", "indian")], 1889),
    rule("clothing repair and alteration", &[("shop", "tailor")], 1883),
    rule("creek", &[("waterway", "stream")], 1882),
    rule("rehabilitation centre", &[("healthcare", "rehabilitation")], 1881),
    rule("rehabilitation", &[("healthcare", "rehabilitation")], 1881),
    rule("massage therapy", &[("healthcare", "massage_therapy")], 1880),
    rule("consulate / consular section / consul residence", &[("amenity", "embassy"), ("diplomatic", "consulate")], 1866),
    rule("belvedere", &[("building", "belvedere")], 1861),
    rule("observatory", &[("building", "observatory")], 1861),
    rule("stage", &[("amenity", "stage")], 1861),
    rule("miradouro", &[("place", "miradouro")], 1861),
    rule("pen (enclosure)", &[("landuse", "animal_pen")], 1856),
    rule("locomotive", &[("rawWmCategory", "locomotive")], 1852),
    rule("stable", &[("building", "stable")], 1850),
    rule("grove", &[("natural", "grove")], 1846),
    rule("business park", &[("landuse", "commercial")], 1845),
    rule("office park", &[("landuse", "commercial")], 1845),
    rule("business estate", &[("landuse", "commercial")], 1845),
    rule("concrete-mixing plant", &[("man_made", "industrial"), ("industrial", "concrete_mixing")], 1838),
    rule("sushi", &[("amenity", "restaurant"), ("cuisine", "sushi")], 1835),
    rule("manicure / pedicure salon", &[("shop", "beauty"), ("beauty", "nails")], 1832),
    rule("nail salon", &[("shop", "beauty"), ("beauty", "nails")], 1832),
    rule("ball park", &[("leisure", "pitch"), ("sport", "baseball")], 1831),
    rule("baseball stadium", &[("leisure", "stadium"), ("sport", "baseball")], 1831),
    rule("baseball park / stadium", &[("leisure", "stadium"), ("sport", "baseball")], 1831),
    rule("ballpark", &[("leisure", "pitch"), ("sport", "baseball")], 1831),
    rule("first aid station / first aid room", &[("amenity", "first_aid")], 1830),
    rule("docks", &[("man_made", "dock")], 1814),
    rule("dock", &[("man_made", "dock")], 1814),
    rule("arch", &[("natural", "arch")], 1809),
    rule("babycare/ babywear shop", &[("shop", "baby_goods")], 1807),
    rule("United States Navy", &[("military:service", "navy"), ("country", "usa")], 1803),
    rule("Target (store)", &[("shop", "department_store"), ("name", "Target"), ("brand", "Target")], 1803),
    rule("textile industry", &[("landuse", "industrial"), ("industrial", "textile")], 1801),
    rule("software developer", &[("office", "software_developer")], 1800),
    rule("motorcycle racing", &[("sport", "motor"), ("motorcycle", "yes")], 1795),
    rule("clubhouse", &[("amenity", "club")], 1788),
    rule("mixed-used building", &[("building", "yes"), ("use", "mixed")], 1788),
    rule("indoor swimming pool / natatorium", &[("leisure", "swimming_pool")], 1786),
    rule("college of technology / polytechnics", &[("amenity", "college"), ("college", "technology")], 1782),
    rule("supplies", &[("rawWmCategory", "supplies")], 1776),
    rule("supplier", &[("rawWmCategory", "supplier")], 1776),
    rule("supply", &[("rawWmCategory", "supply")], 1776),
    rule("1910s construction", &[("historic:period", "1910s_construction")], 1770),
    rule("district court (judiciary)", &[("amenity", "courthouse")], 1770),
    rule("botanical garden", &[("leisure", "garden"), ("garden:type", "botanical")], 1767),
    rule("1900s construction", &[("historic:period", "1900s_construction")], 1764),
    rule("golf club", &[("leisure", "golf_course")], 1764),
    rule("tailings", &[("rawWmCategory", "tailings")], 1757),
    rule("military enlistment office", &[("office", "military_enlistment")], 1756),
    rule("television transmission tower", &[("man_made", "communications_tower"), ("communication:television", "yes")], 1755),
    rule("internet service provider (ISP)", &[("office", "internet_service_provider")], 1753),
    rule("tea stall", &[("amenity", "cafe"), ("cuisine", "teahouse")], 1752),
    rule("tea house", &[("amenity", "cafe"), ("cuisine", "teahouse")], 1752),
    rule("tearoom", &[("amenity", "cafe"), ("cuisine", "teahouse")], 1752),
    rule("guest house", &[("tourism", "guest_house")], 1740),
    rule("drainage", &[("rawWmCategory", "drainage")], 1739),
    rule("peninsula", &[("natural", "peninsula")], 1734),
    rule("maternity hospital", &[("amenity", "hospital"), ("healthcare", "hospital"), ("healthcare:specialty", "maternity")], 1732),
    rule("skiing", &[("sport", "skiing")], 1731),
    rule("former train/railway station", &[("railway", "disused"), ("disused", "station")], 1729),
    rule("shoe repair shop", &[("shop", "shoe_repair")], 1726),
    rule("boom barrier", &[("barrier", "lift_gate")], 1725),
    rule("traffic control barrier", &[("barrier", "traffic_control")], 1725),
    rule("boom gate", &[("barrier", "lift_gate")], 1725),
    rule("chartered accountant", &[("office", "accountant")], 1724),
    rule("chartered accountancy", &[("office", "accountant")], 1724),
    rule("outdoor switchgear", &[("rawWmCategory", "outdoor_switchgear")], 1717),
    rule("mountain resort", &[("tourism", "mountain_resort")], 1707),
    rule("ski resort / area", &[("ski_resort_", "ski_area")], 1707),
    rule("dispatcher office", &[("office", "dispatcher")], 1702),
    rule("lumber", &[("building:material", "wood")], 1686),
    rule("auto wrecking yard", &[("landuse", "industrial"), ("industrial", "auto_wrecker")], 1685),
    rule("junkyard / scrapyard", &[("landuse", "industrial"), ("industrial", "auto_wrecker")], 1685),
    rule("Methodist Church", &[("amenity", "place_of_worship"), ("religion", "christian"), ("denomination", "methodist")], 1684),
    rule("driving training area", &[("amenity", "driving_training")], 1680),
    rule("dead-end railway track", &[("rawWmCategory", "dead-end_railway_track")], 1666),
    rule("Tex-Mex cuisine", &[("amenity", "restaurant"), ("cuisine", "tex-mex")], 1658),
    rule("slipway", &[("leisure", "slipway")], 1654),
    rule("boat ramp / launch", &[("leisure", "slipway")], 1654),
    rule("barrio hall", &[("amenity", "townhall")], 1653),
    rule("barangay hall", &[("amenity", "townhall")], 1653),
    rule("technical service", &[("rawWmCategory", "technical_service")], 1641),
    rule("historic town square", &[("historic", "town_square")], 1640),
    rule("mormons", &[("religion", "christian"), ("denomination", "mormon")], 1638),
    rule("mormon", &[("religion", "christian"), ("denomination", "mormon")], 1638),
    rule("courtyard", &[("man_made", "courtyard")], 1637),
    rule("photocopy shop", &[("shop", "copyshop")], 1628),
    rule("Xerox centre / shop", &[("shop", "copyshop")], 1628),
    rule("copy / printing shop", &[("shop", "copyshop")], 1628),
    rule("Pizza Hut", &[("amenity", "restaurant"), ("cuisine", "pizza"), ("name", "Pizza Hut")], 1623),
    rule("bathroom accessories", &[("shop", "bathroom_furnishing")], 1621),
    rule("strait / channel / passage / narrows", &[("natural", "strait")], 1621),
    rule("dance school / dance academy", &[("amenity", "dancing_school")], 1616),
    rule("dance studio", &[("amenity", "dancing_school")], 1616),
    rule("historic city center", &[("historic", "city_center")], 1615),
    rule("medina", &[("place", "medina")], 1615),
    rule("Jugendstil / Art Nouveau architecture", &[("building:architecture", "Jugendstil/Art_Nouveau")], 1614),
    rule("archives institution", &[("amenity", "archives")], 1613),
    rule("variety store", &[("shop", "variety_store")], 1612),
    rule("street / public clock", &[("amenity", "clock")], 1606),
    rule("metalwork", &[("landuse", "industrial"), ("industrial", "metalwork")], 1604),
    rule("consumer services", &[("amenity", "consumer_services")], 1602),
    rule("railway traction substation", &[("rawWmCategory", "railway_traction_substation")], 1601),
    rule("wifi", &[("internet_access", "wlan")], 1601),
    rule("wi-fi", &[("internet_access", "wlan")], 1601),
    rule("plastics industry", &[("landuse", "industrial"), ("industrial", "plastics")], 1600),
    rule("breakwater", &[("man_made", "breakwater")], 1595),
    rule("mole", &[("man_made", "breakwater")], 1595),
    rule("hillfort", &[("historic", "archaeological_site"), ("site_type", "fortification"), ("fortification_type", "hill_fort")], 1592),
    rule("open air theatre", &[("amenity", "theatre"), ("theatre:type", "amphi")], 1583),
    rule("summerhouse", &[("building", "summer_house")], 1583),
    rule("amphitheatre", &[("amenity", "theatre"), ("theatre:type", "amphi")], 1583),
    rule("amphitheater", &[("amenity", "theatre"), ("theatre:type", "amphi")], 1583),
    rule("fish farm", &[("landuse", "aquaculture")], 1581),
    rule("janas", &[("rawWmCategory", "janas")], 1581),
    rule("sidewalk / pavement / outdoor cafe", &[("amenity", "cafe"), ("outdoor_seating", "yes")], 1581),
    rule("mass grave", &[("cemetery", "mass_grave")], 1577),
    rule("edifice", &[("building", "yes")], 1566),
    rule("blockhouse (fort)", &[("building", "fort"), ("fortified:type", "blockhouse")], 1565),
    rule("standpipe", &[("emergency", "fire_hydrant")], 1564),
    rule("vegetable shop / stall", &[("shop", "greengrocer")], 1563),
    rule("greengrocer /  fruit stall", &[("shop", "greengrocer")], 1563),
    rule("greengrocery", &[("shop", "greengrocer")], 1563),
    rule("minimarket", &[("shop", "convenience")], 1562),
    rule("quay", &[("man_made", "quay")], 1560),
    rule("wharf", &[("man_made", "wharf")], 1560),
    rule("children's wear", &[("shop", "clothes"), ("clothes", "children")], 1559),
    rule("hippodrome", &[("sport", "horse_racing")], 1554),
    rule("horse racing track", &[("sport", "horse_racing")], 1554),
    rule("subdistrict", &[("place", "subdistrict")], 1553),
    rule("polling place (election voting)", &[("amenity", "polling_station")], 1549),
    rule("taluka headquarter", &[("rawWmCategory", "taluka_headquarter")], 1547),
    rule("mandal headquarter", &[("rawWmCategory", "mandal_headquarter")], 1547),
    rule("state school", &[("amenity", "school")], 1542),
    rule("dispensary (specialized medical facility - USSR)", &[("health_facility", "yes"), ("health_facility:type", "dispensary")], 1542),
    rule("natural monument", &[("historic", "monument"), ("natural", "yes")], 1542),
    rule("backpacking", &[("leisure", "backpacking")], 1542),
    rule("hiking", &[("leisure", "hiking")], 1542),
    rule("household chemistry", &[("rawWmCategory", "household_chemistry")], 1540),
    rule("athletics (sport)", &[("sport", "athletics")], 1537),
    rule("basin (geographical)", &[("landuse", "basin")], 1536),
    rule("VOR - VHF omni-directional radio range", &[("navigationaid", "vor")], 1534),
    rule("assembly of god", &[("religion", "christian"), ("denomination", "assemblies_of_god")], 1532),
    rule("road maintenance department / station", &[("amenity", "road_maintenance")], 1523),
    rule("Wendy&#039;s", &[("amenity", "fast_food"), ("cuisine", "burger"), ("name", "Wendy's"), ("brand", "Wendy's")], 1520),
    rule("switch control house", &[("rawWmCategory", "switch_control_house")], 1515),
    rule("eclectic architecture", &[("building:architecture", "eclectic")], 1514),
    rule("oilfield", &[("man_made", "oilfield")], 1513),
    rule("oil field", &[("man_made", "oilfield")], 1513),
    rule("synagogue", &[("religion", "jewish"), ("building", "synagogue")], 1513),
    rule("rice mill", &[("landuse", "industrial"), ("industrial", "mill"), ("product", "rice"), ("use", "grain_milling")], 1509),
    rule("Grade II* Listed (UK)", &[("historic", "heritage"), ("designation", "Grade_II_Listed_(UK)")], 1507),
    rule("bicycle shop", &[("shop", "bicycle")], 1496),
    rule("accounting", &[("office", "accountant")], 1496),
    rule("accountancy", &[("office", "accountant")], 1496),
    rule("bike shop", &[("shop", "bicycle")], 1496),
    rule("accountant", &[("office", "accountant")], 1496),
    rule("accountants", &[("office", "accountant")], 1496),
    rule("urban area", &[("rawWmCategory", "urban_area")], 1495),
    rule("transmitter", &[("rawWmCategory", "transmitter")], 1495),
    rule("cremation", &[("amenity", "crematorium")], 1494),
    rule("crematory", &[("amenity", "crematorium")], 1494),
    rule("crematorium", &[("amenity", "crematorium")], 1494),
    rule("barber shop", &[("shop", "hairdresser")], 1492),
    rule("barber", &[("shop", "hairdresser")], 1492),
    rule("saloon (barber shop)", &[("shop", "hairdresser")], 1492),
    rule("pigeon loft", &[("man_made", "dovecote")], 1490),
    rule("dovecote", &[("man_made", "dovecote")], 1490),
    rule("transport museum", &[("tourism", "museum"), ("subject", "transport")], 1486),
    rule("dog park", &[("leisure", "dog_park")], 1486),
    rule("fifth-level administrative division", &[("boundary", "administrative"), ("admin_level", "5")], 1484),
    rule("dairy farm", &[("landuse", "farmland"), ("produce", "dairy")], 1472),
    rule("sugar mill", &[("landuse", "industrial"), ("industrial", "mill"), ("product", "sugar"), ("use", "sugar_milling")], 1472),
    rule("sugar refinery", &[("landuse", "industrial"), ("industrial", "refinery"), ("product", "sugar"), ("use", "sugar_refining")], 1472),
    rule("freight / transportation / shipping company", &[("amenity", "freight")], 1462),
    rule("concert hall", &[("amenity", "concert_hall")], 1461),
    rule("movie / film / TV location", &[("rawWmCategory", "movie_/_film_/_TV_location")], 1456),
    rule("window fitters", &[("rawWmCategory", "window_fitters")], 1452),
    rule("scuba diving facility / area", &[("sport", "scuba_diving")], 1452),
    rule("window and door replacement", &[("rawWmCategory", "window_and_door_replacement")], 1452),
    rule("electoral ward", &[("boundary", "political"), ("political_division", "ward")], 1449),
    rule("ward", &[("boundary", "political"), ("political_division", "ward")], 1449),
    rule("doughnuts", &[("cuisine", "donut")], 1448),
    rule("donuts / doughnuts", &[("cuisine", "donut")], 1448),
    rule("wine merchant", &[("shop", "alcohol"), ("drink:wine", "retail")], 1445),
    rule("wine shop", &[("shop", "alcohol"), ("drink:wine", "retail")], 1445),
    rule("Sitio", &[("place", "village")], 1443),
    rule("Medieval / Middle Ages", &[("historic:period", "Medieval_/_Middle_Ages")], 1442),
    rule("rescue", &[("rawWmCategory", "rescue")], 1439),
    rule("suspension bridge", &[("bridge", "yes"), ("bridge:structure", "suspension")], 1438),
    rule("driving range", &[("leisure", "golf_driving_range")], 1436),
    rule("morgue / mortuary", &[("amenity", "mortuary")], 1434),
    rule("publishing house", &[("office", "publishing_house")], 1431),
    rule("discothèque", &[("amenity", "nightclub")], 1431),
    rule("hobby store/shop", &[("shop", "hobby")], 1430),
    rule("living farm museum", &[("tourism", "museum"), ("subject", "living_farm")], 1422),
    rule("savings and credit cooperative", &[("amenity", "bank")], 1422),
    rule("ecomuseum", &[("tourism", "museum"), ("subject", "ecology")], 1422),
    rule("living history museum", &[("tourism", "museum"), ("subject", "living_history")], 1422),
    rule("living museum", &[("tourism", "museum")], 1422),
    rule("open air museum", &[("tourism", "museum"), ("subject", "open_air")], 1422),
    rule("credit union", &[("amenity", "bank")], 1422),
    rule("skansen", &[("tourism", "museum"), ("subject", "open_air")], 1422),
    rule("museum of buildings", &[("tourism", "museum"), ("subject", "buildings")], 1422),
    rule("folk museum", &[("tourism", "museum"), ("subject", "folk")], 1422),
    rule("Rococo architecture (Late Baroque)", &[("building:architecture", "rococo")], 1421),
    rule("Baroque architecture", &[("building:architecture", "baroque")], 1421),
    rule("therapy", &[("healthcare", "therapy")], 1418),
    rule("Home Depot", &[("shop", "doityourself"), ("name", "Home_Depot")], 1416),
    rule("gatehouse", &[("building", "gatehouse")], 1415),
    rule("mobile home community", &[("amenity", "_trailer_park")], 1414),
    rule("arena", &[("leisure", "arena")], 1410),
    rule("hunting", &[("leisure", "hunting")], 1407),
    rule("grandstand", &[("building", "grandstand")], 1405),
    rule("stadium stand", &[("building", "grandstand")], 1405),
    rule("tube station entrance / exit", &[("railway", "subway_entrance")], 1401),
    rule("metro entrance / exit", &[("railway", "subway_entrance")], 1401),
    rule("underground station entrance / exit", &[("railway", "subway_entrance")], 1401),
    rule("weir", &[("waterway", "weir")], 1401),
    rule("city gate", &[("historic", "city_gate")], 1397),
    rule("gram panchayat", &[("place", "village")], 1393),
    rule("1940s construction", &[("historic:period", "1940s_construction")], 1391),
    rule("fishing tackle shop", &[("shop", "fishing")], 1391),
    rule("triangulation station", &[("man_made", "survey_point"), ("survey_point:type", "triangulation")], 1385),
    rule("trigonometrical station", &[("man_made", "survey_point"), ("survey_point:type", "trigonometric")], 1385),
    rule("triangulation pillar", &[("man_made", "survey_point"), ("survey_point:type", "triangulation")], 1385),
    rule("pig farm", &[("landuse", "farmland"), ("produce", "pig")], 1385),
    rule("trig point", &[("man_made", "survey_point"), ("survey_point:type", "trigonometric")], 1385),
    rule("water sports", &[("sport", "water_sports")], 1383),
    rule("Hanuman temple", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 1382),
    rule("Hanuman mandir", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 1382),
    rule("cowshed", &[("building", "cowshed")], 1381),
    rule("massage parlour", &[("shop", "massage")], 1378),
    rule("sea", &[("place", "sea")], 1373),
    rule("canal bridge", &[("bridge", "yes")], 1368),
    rule("football - soccer club", &[("club", "sport"), ("sport", "soccer")], 1367),
    rule("fashion", &[("rawWmCategory", "fashion")], 1363),
    rule("Lidl", &[("rawWmCategory", "Lidl")], 1360),
    rule("bus stop shelter", &[("highway", "bus_stop"), ("shelter", "yes")], 1358),
    rule("Walgreens", &[("shop", "chemist"), ("name", "Walgreens")], 1357),
    rule("barbecue", &[("amenity", "restaurant"), ("cuisine", "barbecue")], 1355),
    rule("bbq", &[("amenity", "restaurant"), ("cuisine", "barbecue")], 1355),
    rule("train", &[("rawWmCategory", "train")], 1353),
    rule("bird hide", &[("leisure", "bird_hide")], 1352),
    rule("birdwatching", &[("leisure", "birdwatching")], 1352),
    rule("electrical engineering", &[("rawWmCategory", "electrical_engineering")], 1348),
    rule("autodromo", &[("sport", "motor")], 1345),
    rule("مفيض", &[("rawWmCategory", "مفيض")], 1338),
    rule("spillway", &[("waterway", "spillway")], 1338),
    rule("beer store", &[("shop", "alcohol"), ("drink:beer", "retail")], 1337),
    rule("canyon / gorge", &[("natural", "gorge")], 1336),
    rule("online shopping", &[("amenity", "online_shopping")], 1329),
    rule("rubbish", &[("amenity", "waste_disposal")], 1320),
    rule("waste", &[("amenity", "waste_disposal")], 1320),
    rule("garbage", &[("amenity", "waste_disposal")], 1320),
    rule("cleaning service / company", &[("amenity", "cleaning_service")], 1315),
    rule("sanitation / hygiene service", &[("amenity", "cleaning_service")], 1315),
    rule("cleaner", &[("rawWmCategory", "cleaner")], 1315),
    rule("kitchen", &[("rawWmCategory", "kitchen")], 1312),
    rule("interlocking tower", &[("railway", "signal")], 1309),
    rule("signal box", &[("railway", "signal")], 1309),
    rule("celebrity home", &[("rawWmCategory", "celebrity_home")], 1302),
    rule("forest compartment", &[("rawWmCategory", "forest_compartment")], 1300),
    rule("coast guard", &[("amenity", "coast_guard")], 1299),
    rule("Subway (restaurant)", &[("amenity", "fast_food"), ("cuisine", "sandwich"), ("name", "Subway"), ("brand", "Subway")], 1299),
    rule("antique shop", &[("shop", "antique")], 1298),
    rule("capital city of state/province/region", &[("place", "city"), ("capital", "yes")], 1297),
    rule("deforested / clearcut area", &[("man_made", "clearcut")], 1296),
    rule("motocross / off road circuit", &[("rawWmCategory", "motocross_/_off_road_circuit")], 1295),
    rule("motocross track", &[("sport", "motocross")], 1295),
    rule("dirt bike track", &[("sport", "motocross")], 1295),
    rule("electric grid company", &[("rawWmCategory", "electric_grid_company")], 1292),
    rule("electricity supplier", &[("rawWmCategory", "electricity_supplier")], 1292),
    rule("narrow gauge railway", &[("railway", "narrow_gauge")], 1292),
    rule("fishmonger", &[("shop", "seafood")], 1286),
    rule("seafood shop / market", &[("shop", "seafood")], 1286),
    rule("cargo terminal", &[("rawWmCategory", "cargo_terminal")], 1283),
    rule("dry port", &[("rawWmCategory", "dry_port")], 1283),
    rule("container / transport / storage terminal", &[("rawWmCategory", "container_/_transport_/_storage_terminal")], 1283),
    rule("manufactured goods store", &[("rawWmCategory", "manufactured_goods_store")], 1281),
    rule("tailor/ tailoring", &[("shop", "tailor")], 1280),
    rule("tanning", &[("landuse", "industrial"), ("industrial", "tanning")], 1280),
    rule("Presbyterian Church", &[("amenity", "place_of_worship"), ("religion", "christian"), ("denomination", "presbyterian"), ("building", "church")], 1277),
    rule("presbyterianism", &[("amenity", "place_of_worship"), ("religion", "christian"), ("denomination", "presbyterian")], 1277),
    rule("A-league", &[("rawWmCategory", "A-league")], 1272),
    rule("major league soccer", &[("club", "sport"), ("sport", "soccer")], 1272),
    rule("football premier league", &[("club", "sport"), ("sport", "soccer")], 1272),
    rule("truck stop", &[("highway", "rest_area")], 1270),
    rule("mailing", &[("rawWmCategory", "mailing")], 1266),
    rule("vicarage", &[("building", "vicarage")], 1263),
    rule("presbytery", &[("building", "presbytery")], 1263),
    rule("manse", &[("building", "manse")], 1263),
    rule("Taco Bell", &[("amenity", "restaurant"), ("cuisine", "mexican"), ("name", "Taco_Bell")], 1263),
    rule("parsonage", &[("building", "parsonage")], 1263),
    rule("rectory", &[("building", "rectory")], 1263),
    rule("Jainism", &[("amenity", "place_of_worship"), ("religion", "jain")], 1257),
    rule("new year event", &[("rawWmCategory", "new_year_event")], 1248),
    rule("new year celebration", &[("rawWmCategory", "new_year_celebration")], 1248),
    rule("payment centre / settlement centre", &[("office", "payment_centre")], 1242),
    rule("web design", &[("amenity", "web_design")], 1242),
    rule("student center / student union", &[("amenity", "student_union")], 1238),
    rule("ridge", &[("natural", "ridge")], 1236),
    rule("radiocommunication", &[("rawWmCategory", "radiocommunication")], 1232),
    rule("national park", &[("boundary", "national_park")], 1231),
    rule("Renfe", &[("operator", "Renfe")], 1225),
    rule("sewing", &[("rawWmCategory", "sewing")], 1224),
    rule("tires", &[("rawWmCategory", "tires")], 1223),
    rule("boat rental station", &[("amenity", "boat_rental")], 1220),
    rule("boat hire", &[("amenity", "boat_rental")], 1220),
    rule("Devi temple", &[("amenity", "place_of_worship"), ("building", "temple"), ("religion", "hindu")], 1219),
    rule("city wall", &[("historic", "city_wall")], 1216),
    rule("medical ward / department", &[("amenity", "hospital")], 1216),
    rule("sanitary", &[("rawWmCategory", "sanitary")], 1209),
    rule("crater", &[("natural", "crater")], 1208),
    rule("trees", &[("landuse", "forest")], 1206),
    rule("Ukrainian Orthodox Church - Moscow Patriarchate", &[("amenity", "place_of_worship"), ("religion", "christian"), ("denomination", "russian_orthodox"), ("building", "church")], 1199),
    rule("motorcycle repair service", &[("shop", "motorcycle_repair")], 1197),
    rule("pedestrian area", &[("highway", "pedestrian")], 1195),
    rule("LIGC - Long Island Gold Coast", &[("rawWmCategory", "LIGC_-_Long_Island_Gold_Coast")], 1194),
    rule("multipurpose hall", &[("amenity", "community_centre")], 1191),
    rule("assembly hall", &[("amenity", "community_centre")], 1191),
    rule("function hall", &[("amenity", "community_centre")], 1191),
    rule("clothing", &[("rawWmCategory", "clothing")], 1191),
    rule("wayside shrine / chapel-shrine / bildstock", &[("historic", "wayside_shrine")], 1190),
    rule("medical equipment", &[("rawWmCategory", "medical_equipment")], 1189),
    rule("fence", &[("barrier", "fence")], 1188),
    rule("granary", &[("building", "granary")], 1187),
    rule("political party", &[("rawWmCategory", "political_party")], 1186),
    rule("monastic college", &[("amenity", "college"), ("college", "monastic")], 1185),
    rule("college of theology", &[("amenity", "college"), ("college", "theology")], 1185),
    rule("divinity school", &[("amenity", "school"), ("school", "divinity")], 1185),
    rule("department of theology", &[("amenity", "college"), ("college", "theology")], 1185),
    rule("seminary", &[("building", "seminary")], 1185),
    rule("housing cooperative", &[("landuse", "residential")], 1184),
    rule("nude beach", &[("natural", "beach"), ("nudism", "yes")], 1182),
    rule("naturism", &[("nudism", "yes")], 1182),
    rule("naturist club", &[("club", "nudism")], 1182),
    rule("nudism", &[("nudism", "yes")], 1182),
    rule("banqueting", &[("amenity", "events_venue")], 1179),
    rule("security contractor", &[("office", "security_contractor")], 1179),
    rule("banquet", &[("rawWmCategory", "banquet")], 1179),
    rule("private security company", &[("office", "private_security")], 1179),
    rule("tell (mound)", &[("man_made", "tell)")], 1176),
    rule("CVS Pharmacy", &[("shop", "chemist"), ("name", "CVS_Pharmacy")], 1176),
    rule("mausoleum", &[("historic", "tomb"), ("tomb", "mausoleum")], 1174),
    rule("Banco do Brasil", &[("amenity", "bank"), ("name", "Banco_do_Brasil")], 1173),
    rule("douar", &[("place", "hamlet")], 1172),
    rule("shoal, sandbar", &[("natural", "shoal")], 1170),
    rule("meat processing", &[("landuse", "industrial"), ("industrial", "meat_processing"), ("use", "meat_processing")], 1169),
    rule("godown", &[("building", "warehouse")], 1168),
    rule("gendarmerie", &[("amenity", "police")], 1167),
    rule("Royal Dutch Shell", &[("rawWmCategory", "Royal_Dutch_Shell")], 1167),
    rule("Shell", &[("rawWmCategory", "Shell")], 1167),
    rule("Iglesia Ni Cristo", &[("rawWmCategory", "Iglesia_Ni_Cristo")], 1166),
    rule("ashram", &[("landuse", "religious")], 1165),
    rule("canoe club", &[("club", "sport"), ("sport", "canoe")], 1162),
    rule("yacht club / sailing club", &[("club", "sport"), ("sport", "sailing")], 1162),
    rule("kart circuit", &[("sport", "karting")], 1162),
    rule("go-kart track", &[("sport", "karting")], 1162),
    rule("1920s construction", &[("historic:period", "1920s_construction")], 1159),
    rule("medical college", &[("amenity", "college"), ("college", "medical")], 1156),
    rule("medical school", &[("amenity", "university"), ("faculty", "medical")], 1156),
    rule("tavern", &[("amenity", "pub")], 1156),
    rule("foundation", &[("rawWmCategory", "foundation")], 1156),
    rule("castle ruins", &[("historic", "castle"), ("ruins", "yes")], 1153),
    rule("ruined castle", &[("historic", "castle"), ("ruins", "yes")], 1153),
    rule("milk booth / shop", &[("shop", "dairy")], 1151),
    rule("dairy products shop", &[("shop", "dairy")], 1151),
    rule("seaside resort", &[("leisure", "beach_resort")], 1149),
    rule("beach resort", &[("leisure", "beach_resort")], 1149),
    rule("mobile home park / trailer park", &[("landuse", "trailer_park")], 1146),
    rule("cannon", &[("rawWmCategory", "cannon")], 1144),
    rule("drive-in restaurant", &[("amenity", "restaurant"), ("drive_in", "yes")], 1142),
    rule("buffet", &[("amenity", "restaurant"), ("cuisine", "buffet")], 1141),
    rule("meadow", &[("landuse", "meadow")], 1141),
    rule("scouting", &[("club", "scout")], 1141),
    rule("river source", &[("rawWmCategory", "river_source")], 1139),
    rule("management company", &[("office", "management_company")], 1137),
    rule("hockey box", &[("sport", "hockey")], 1135),
    rule("cosmetology", &[("shop", "beauty")], 1134),
    rule("baker's shop", &[("shop", "bakery")], 1134),
    rule("beauty therapy", &[("shop", "beauty")], 1134),
    rule("LDS Church (The Church of Jesus Christ of Latter-day Saints)", &[("amenity", "place_of_worship"), ("religion", "christian"), ("denomination", "mormon"), ("building", "church")], 1133),
    rule("electrical supply store", &[("shop", "electrical_supply")], 1130),
    rule("car assembly factory", &[("landuse", "industrial"), ("industrial", "car_assembly")], 1130),
    rule("electrical retailer", &[("shop", "electrical")], 1130),
    rule("automobile factory", &[("landuse", "industrial"), ("industrial", "car_assembly")], 1130),
    rule("social service department / organization", &[("rawWmCategory", "social_service_department_/_organization")], 1130),
    rule("DVD / CD shop", &[("shop", "music")], 1129),
    rule("record shop", &[("shop", "music")], 1129),
    rule("football second league", &[("rawWmCategory", "football_second_league")], 1129),
    rule("music / entertainment shop", &[("shop", "music")], 1129),
    rule("college of nursing", &[("amenity", "college"), ("college", "nursing")], 1128),
    rule("nursing school", &[("amenity", "school"), ("school", "nursing")], 1128),
    rule("serra", &[("natural", "mountain")], 1123),
    rule("international organization", &[("rawWmCategory", "international_organization")], 1122),
    rule("dollar store", &[("shop", "variety_store")], 1121),
    rule("price-point retailer", &[("shop", "variety_store")], 1121),
    rule("heating ventilation and air conditioning - HVAC", &[("craft", "hvac")], 1118),
    rule("press / news agency", &[("shop", "newsagent")], 1117),
    rule("tobacconist's shop", &[("shop", "tobacco")], 1115),
    rule("smoke shop", &[("shop", "tobacco")], 1115),
    rule("cigar shop", &[("shop", "tobacco")], 1115),
    rule("tobacco shop", &[("shop", "tobacco")], 1115),
    rule("trestle (bridge)", &[("bridge", "trestle")], 1110),
    rule("obelisk", &[("historic", "memorial"), ("memorial:type", "obelisk")], 1106),
    rule("private housing estate", &[("landuse", "residential"), ("residential", "gated")], 1104),
    rule("marsh", &[("waterway", "marsh")], 1103),
    rule("softball field", &[("leisure", "pitch"), ("sport", "softball")], 1103),
    rule("crazy golf", &[("leisure", "miniature_golf")], 1102),
    rule("miniature golf", &[("leisure", "miniature_golf")], 1102),
    rule("mini golf", &[("leisure", "miniature_golf")], 1102),
    rule("interior", &[("rawWmCategory", "interior")], 1101),
    rule("proving ground", &[("military", "proving_ground")], 1100),
    rule("aqueduct", &[("bridge", "aqueduct")], 1097),
    rule("Minuteman", &[("missile", "minuteman")], 1096),
    rule("small architectural form", &[("building:architecture", "small_architectural_form")], 1089),
    rule("red light camera", &[("enforcement", "red_light_camera")], 1089),
    rule("photo radar", &[("enforcement", "photo_radar")], 1089),
    rule("gatso", &[("enforcement", "speed_camera")], 1089),
    rule("speed trap", &[("enforcement", "speed_trap")], 1089),
    rule("traffic enforcement camera / detector", &[("enforcement", "speed_camera")], 1089),
    rule("speed camera", &[("enforcement", "speed_camera")], 1089),
    rule("Seventh-day Adventist Church", &[("religion", "christian"), ("denomination", "mormon"), ("building", "church")], 1087),
    rule("emergency (to be replaced)", &[("rawWmCategory", "emergency_(to_be_replaced)")], 1087),
    rule("neolithic age", &[("historic:period", "neolithic_age")], 1086),
    rule("trade union", &[("rawWmCategory", "trade_union")], 1085),
    rule("labour union", &[("rawWmCategory", "labour_union")], 1085),
    rule("town centre", &[("rawWmCategory", "town_centre")], 1079),
    rule("carpet / flooring shop", &[("shop", "flooring")], 1079),
    rule("traffic light", &[("highway", "traffic_signals")], 1078),
    rule("degree college", &[("amenity", "university")], 1074),
    rule("United States Air Force", &[("military:service", "air_force"), ("country", "usa")], 1071),
    rule("office supply merchant /store", &[("shop", "office_supply")], 1068),
    rule("rail wye", &[("junction", "wye"), ("railway", "rail")], 1068),
    rule("railway junction", &[("junction", "yes"), ("railway", "rail")], 1068),
    rule("moveable bridge", &[("bridge", "moveable")], 1064),
    rule("karst", &[("surface", "karst")], 1063),
    rule("youth organisation", &[("rawWmCategory", "youth_organisation")], 1057),
    rule("youth organization", &[("rawWmCategory", "youth_organization")], 1057),
    rule("watch repair/sales shop", &[("shop", "watch")], 1055),
    rule("american football stadium", &[("leisure", "stadium"), ("sport", "american_football")], 1055),
    rule("cement plant", &[("landuse", "industrial"), ("industrial", "cement_plant")], 1049),
    rule("arcade (architecture)", &[("covered", "arcade")], 1047),
    rule("canopy", &[("rawWmCategory", "canopy")], 1046),
    rule("mechanical engineering", &[("rawWmCategory", "mechanical_engineering")], 1038),
    rule("paintball", &[("sport", "paintball")], 1036),
    rule("refuge", &[("amenity", "shelter")], 1035),
    rule("mountaineering", &[("sport", "climbing")], 1032),
    rule("mountain climbing", &[("sport", "climbing")], 1032),
    rule("17th century construction", &[("historic:period", "17th_century_construction")], 1032),
    rule("constructivism", &[("rawWmCategory", "constructivism")], 1031),
    rule("fabrics", &[("rawWmCategory", "fabrics")], 1029),
    rule("walkway", &[("rawWmCategory", "walkway")], 1024),
    rule("1960_construction", &[("historic:period", "1960_construction")], 1022),
    rule("automotive company", &[("rawWmCategory", "automotive_company")], 1022),
    rule("local museum", &[("amenity", "museum"), ("subject", "local_history")], 1021),
    rule("peatbog", &[("wetland", "bog"), ("bog:type", "peat")], 1021),
    rule("Fishing / Hunting / Wilderness Lodge", &[("tourism", "motel")], 1020),
    rule("bistro", &[("amenity", "restaurant"), ("cuisine", "bistro")], 1018),
    rule("college of arts / science / commerce and industry", &[("amenity", "college")], 1016),
    rule("religious organisation", &[("rawWmCategory", "religious_organisation")], 1015),
    rule("design studio", &[("office", "design_studio")], 1015),
    rule("missionary order", &[("rawWmCategory", "missionary_order")], 1015),
    rule("religious centre", &[("landuse", "religious")], 1015),
    rule("religious mission post", &[("building", "religious_mission_post")], 1015),
    rule("religious center", &[("building", "religious_center")], 1015),
    rule("derasar", &[("amenity", "place_of_worship"), ("religion", "jain"), ("building", "temple")], 1014),
    rule("Jain temple", &[("amenity", "place_of_worship"), ("religion", "jain"), ("building", "temple")], 1014),
    rule("lotto", &[("rawWmCategory", "lotto")], 1008),
    rule("lottery", &[("rawWmCategory", "lottery")], 1008),
    rule("fraternal organization", &[("rawWmCategory", "fraternal_organization")], 1007),
    rule("fraternity", &[("rawWmCategory", "fraternity")], 1007),
    rule("thermal power station", &[("rawWmCategory", "thermal_power_station")], 1006),
    rule("Selsoviet", &[("rawWmCategory", "Selsoviet")], 1005),
    rule("paint", &[("rawWmCategory", "paint")], 1002),
    rule("Macedonian Orthodox Church - Ohrid Archbishopric", &[("amenity''place_of_worship", ""), ("religion", "christian"), ("denomination", "macedonian_orthodox"), ("building", "church")], 1001),
    rule("justice", &[("rawWmCategory", "justice")], 1000),
    rule("Gothic architecture", &[("building:architecture", "gothic")], 995),
    rule("diner", &[("amenity", "restaurant"), ("cuisine", "diner")], 993),
    rule("SNCF", &[("rawWmCategory", "SNCF")], 993),
    rule("landscaping", &[("rawWmCategory", "landscaping")], 992),
    rule("mental / lunatic asylum", &[("amenity", "social_facility"), ("social_facility:for", "mental_health")], 991),
    rule("insane asylum", &[("amenity", "social_facility"), ("social_facility:for", "mental_health")], 991),
    rule("mental institution / hospital", &[("amenity", "social_facility"), ("social_facility:for", "mental_health")], 991),
    rule("psychiatric hospital / clinic", &[("amenity", "social_facility"), ("social_facility:for", "mental_health")], 991),
    rule("service railway building", &[("rawWmCategory", "service_railway_building")], 989),
    rule("fair", &[("rawWmCategory", "fair")], 988),
    rule("historic site", &[("historic", "site")], 983),
    rule("sinkhole", &[("natural", "sinkhole")], 983),
    rule("beer garden", &[("amenity", "beergarden")], 980),
    rule("marketing", &[("rawWmCategory", "marketing")], 973),
    rule("Stalinist architecture", &[("building:architecture", "stalinist")], 968),
    rule("shaft", &[("rawWmCategory", "shaft")], 967),
    rule("steel mill", &[("landuse", "industrial"), ("industrial", "mill"), ("product", "steel")], 964),
    rule("steelworks", &[("landuse", "industrial"), ("industrial", "mill"), ("product", "steel")], 964),
    rule("ministry of finance / department of treasury", &[("rawWmCategory", "ministry_of_finance_/_department_of_treasury")], 963),
    rule("sheep farm", &[("landuse", "farmland"), ("produce", "sheep")], 963),
    rule("gas pipeline", &[("man_made", "pipeline"), ("product", "gas")], 963),
    rule("dargah", &[("amenity", "place_of_worship"), ("religion", "muslim"), ("building", "shrine")], 963),
    rule("children's hospital", &[("amenity", "hospital"), ("healthcare:specialty", "paediatrics")], 959),
    rule("railway tunnel", &[("tunnel", "yes")], 959),
    rule("pediatric hospital", &[("amenity", "hospital"), ("healthcare:specialty", "paediatrics")], 959),
    rule("truss bridge", &[("bridge", "yes")], 957),
    rule("building machinery and equipment", &[("rawWmCategory", "building_machinery_and_equipment")], 955),
    rule("state park", &[("leisure", "park")], 955),
    rule("cargo", &[("rawWmCategory", "cargo")], 954),
    rule("bridal shop", &[("shop", "bridal")], 953),
    rule("weigh station / truck scale / weighbridge", &[("amenity", "weighbridge")], 951),
    rule("1962_construction", &[("historic:period", "1962_construction")], 950),
    rule("1890s construction", &[("historic:period", "1890s_construction")], 949),
    rule("tennis club", &[("club", "sport"), ("sport", "tennis")], 949),
    rule("food court", &[("amenity", "food_court")], 948),
    rule("aerospace industry", &[("landuse", "industrial"), ("industrial", "aerospace")], 946),
    rule("Fachwerk style architecture", &[("building:architecture", "fachwerk_style")], 945),
    rule("1959_construction", &[("historic:period", "1959_construction")], 944),
    rule("resthouse", &[("tourism", "resthouse")], 944),
    rule("gambling", &[("amenity", "gambling")], 944),
    rule("pension (lodging)", &[("tourism", "guest_house")], 943),
    rule("discount store", &[("shop", "variety_store")], 940),
    rule("country", &[("rawWmCategory", "country")], 939),
    rule("pet food / supplies", &[("shop", "pet_food")], 937),
    rule("sports wear", &[("shop", "clothes"), ("clothes", "sports")], 932),
    rule("sportswear", &[("shop", "clothes"), ("clothes", "sports")], 932),
    rule("uniform supply", &[("shop", "clothes"), ("clothes", "uniform")], 930),
    rule("military police", &[("amenity", "police"), ("military", "yes")], 929),
    rule("ghanta ghar", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 928),
    rule("clock tower", &[("man_made", "tower"), ("clock", "yes")], 928),
    rule("1963_construction", &[("historic:period", "1963_construction")], 928),
    rule("hermitage", &[("building", "hermitage")], 927),
    rule("flour mill", &[("landuse", "industrial"), ("industrial", "mill"), ("product", "flour")], 925),
    rule("grist mill", &[("landuse", "industrial"), ("industrial", "mill"), ("product", "grist")], 925),
    rule("Intermarche", &[("rawWmCategory", "Intermarche")], 924),
    rule("Intermediate college", &[("rawWmCategory", "Intermediate_college")], 923),
    rule("ladies hostel", &[("rawWmCategory", "ladies_hostel")], 922),
    rule("Christian Congregation of Brazil (CCB)", &[("rawWmCategory", "Christian_Congregation_of_Brazil_(CCB)")], 922),
    rule("women's hostel", &[("rawWmCategory", "womens_hostel")], 922),
    rule("girls hostel", &[("rawWmCategory", "girls_hostel")], 922),
    rule("staff quarters", &[("rawWmCategory", "staff_quarters")], 921),
    rule("television studio", &[("rawWmCategory", "television_studio")], 921),
    rule("festival", &[("rawWmCategory", "festival")], 921),
    rule("DME - distance measuring equipment", &[("navigationaid", "dme")], 921),
    rule("1958_construction", &[("historic:period", "1958_construction")], 920),
    rule("pharmaceutical", &[("rawWmCategory", "pharmaceutical")], 920),
    rule("terrain", &[("rawWmCategory", "terrain")], 920),
    rule("film studio", &[("rawWmCategory", "film_studio")], 918),
    rule("film/video production studio/facility", &[("rawWmCategory", "film/video_production_studio/facility")], 918),
    rule("covered reservoir - water", &[("rawWmCategory", "covered_reservoir_-_water")], 912),
    rule("scheduled ancient monument", &[("rawWmCategory", "scheduled_ancient_monument")], 910),
    rule("migration service", &[("rawWmCategory", "migration_service")], 910),
    rule("pillar", &[("rawWmCategory", "pillar")], 901),
    rule("column", &[("rawWmCategory", "column")], 901),
    rule("pension fund office (Russia)", &[("rawWmCategory", "pension_fund_office_(Russia)")], 898),
    rule("submarine", &[("rawWmCategory", "submarine")], 898),
    rule("consumer goods marketplace", &[("rawWmCategory", "consumer_goods_marketplace")], 897),
    rule("floodgate", &[("rawWmCategory", "floodgate")], 897),
    rule("1965_construction", &[("historic:period", "1965_construction")], 896),
    rule("track - DONT USE - CATEGORY WILL BE REMOVED", &[("rawWmCategory", "track_-_DONT_USE_-_CATEGORY_WILL_BE_REMOVED")], 894),
    rule("internment", &[("rawWmCategory", "internment")], 893),
    rule("concentration camp", &[("rawWmCategory", "concentration_camp")], 893),
    rule("pagoda", &[("amenity", "place_of_worship"), ("building", "pagoda")], 892),
    rule("student", &[("rawWmCategory", "student")], 890),
    rule("1964_construction", &[("historic:period", "1964_construction")], 889),
    rule("battlefield", &[("rawWmCategory", "battlefield")], 883),
    rule("1961_construction", &[("historic:period", "1961_construction")], 882),
    rule("cliff", &[("natural", "cliff")], 881),
    rule("Vinayagar / Pillaiyar temple", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 876),
    rule("swimming", &[("sport", "swimming")], 876),
    rule("Ganesha / Ganapati temple", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 876),
    rule("lamp store", &[("shop", "lamps")], 874),
    rule("lighting shop", &[("rawWmCategory", "lamps")], 874),
    rule("track and field ground", &[("leisure", "track"), ("sport", "athletics")], 872),
    rule("airways", &[("rawWmCategory", "airways")], 872),
    rule("athletics track", &[("leisure", "track"), ("sport", "athletics")], 872),
    rule("airline company", &[("rawWmCategory", "airline_company")], 872),
    rule("airlines", &[("rawWmCategory", "airlines")], 872),
    rule("cable/satellite TV provider", &[("rawWmCategory", "cable/satellite_TV_provider")], 868),
    rule("cable TV provider", &[("rawWmCategory", "cable_TV_provider")], 868),
    rule("plateau", &[("natural", "plateau")], 866),
    rule("youth center", &[("rawWmCategory", "youth_center")], 865),
    rule("youth club", &[("rawWmCategory", "youth_club")], 865),
    rule("youth centre", &[("rawWmCategory", "youth_centre")], 865),
    rule("bicycle rental", &[("rawWmCategory", "bicycle_rental")], 864),
    rule("cycle hire", &[("rawWmCategory", "cycle_hire")], 864),
    rule("rescue service", &[("rawWmCategory", "rescue_service")], 864),
    rule("karaoke", &[("rawWmCategory", "karaoke")], 863),
    rule("railroad turntable", &[("rawWmCategory", "railroad_turntable")], 861),
    rule("cold storage warehouse", &[("rawWmCategory", "cold_storage_warehouse")], 859),
    rule("Carrefour Market", &[("rawWmCategory", "Carrefour_Market")], 854),
    rule("helicopter", &[("rawWmCategory", "helicopter")], 853),
    rule("onsen", &[("rawWmCategory", "onsen")], 850),
    rule("indoor stadium", &[("rawWmCategory", "indoor_stadium")], 849),
    rule("contractor", &[("rawWmCategory", "contractor")], 849),
    rule("fieldhouse (athletics building)", &[("rawWmCategory", "fieldhouse_(athletics_building)")], 849),
    rule("ophthalmology", &[("rawWmCategory", "ophthalmology")], 844),
    rule("bindery", &[("rawWmCategory", "bindery")], 844),
    rule("grotto", &[("rawWmCategory", "grotto")], 844),
    rule("printing office", &[("rawWmCategory", "printing_office")], 844),
    rule("Dunkin Donuts", &[("rawWmCategory", "Dunkin_Donuts")], 844),
    rule("beekeeping", &[("rawWmCategory", "beekeeping")], 841),
    rule("slaughterhouse / abattoir", &[("rawWmCategory", "slaughterhouse_/_abattoir")], 840),
    rule("station - Australian ranch", &[("rawWmCategory", "station_-_Australian_ranch")], 839),
    rule("steam locomotive", &[("rawWmCategory", "steam_locomotive")], 838),
    rule("bicycle stand", &[("rawWmCategory", "bicycle_stand")], 837),
    rule("alcohol distillery", &[("rawWmCategory", "alcohol_distillery")], 837),
    rule("kennels", &[("rawWmCategory", "kennels")], 836),
    rule("YMCA", &[("rawWmCategory", "YMCA")], 835),
    rule("police box", &[("rawWmCategory", "police_box")], 834),
    rule("fairground", &[("rawWmCategory", "fairground")], 828),
    rule("charity shop", &[("rawWmCategory", "charity_shop")], 828),
    rule("thrift store", &[("rawWmCategory", "thrift_store")], 828),
    rule("insurance broker", &[("rawWmCategory", "insurance_broker")], 826),
    rule("insurance advisor / agent", &[("rawWmCategory", "insurance_advisor_/_agent")], 826),
    rule("anglicanism", &[("rawWmCategory", "anglicanism")], 824),
    rule("sanctuary", &[("rawWmCategory", "sanctuary")], 824),
    rule("Adif", &[("rawWmCategory", "Adif")], 822),
    rule("2014_construction", &[("historic:period", "2014_construction")], 819),
    rule("ceramics", &[("rawWmCategory", "ceramics")], 819),
    rule("object of cultural heritage of regional importance (Russia)", &[("rawWmCategory", "object_of_cultural_heritage_of_regional_importance_(Russia)")], 816),
    rule("maranatha", &[("rawWmCategory", "maranatha")], 816),
    rule("Ukrainian Greek Catholic Church (UGCC)", &[("amenity", "place_of_worship"), ("religion", "catholic"), ("denomination", "ukrainian_greek_catholic")], 815),
    rule("border stone", &[("rawWmCategory", "border_stone")], 812),
    rule("border marker", &[("rawWmCategory", "border_marker")], 812),
    rule("1966_construction", &[("historic:period", "1966_construction")], 812),
    rule("boundary marker", &[("rawWmCategory", "boundary_marker")], 812),
    rule("game center", &[("rawWmCategory", "game_center")], 811),
    rule("amusement (video) arcade", &[("rawWmCategory", "amusement_(video)_arcade")], 811),
    rule("video arcade", &[("rawWmCategory", "video_arcade")], 811),
    rule("department of law", &[("rawWmCategory", "department_of_law")], 806),
    rule("college of law", &[("rawWmCategory", "college_of_law")], 806),
    rule("state", &[("rawWmCategory", "state")], 806),
    rule("faculty of law / law school", &[("rawWmCategory", "faculty_of_law_/_law_school")], 806),
    rule("breakdown cover", &[("rawWmCategory", "breakdown_cover")], 804),
    rule("road service", &[("rawWmCategory", "road_service")], 804),
    rule("emergency roadside repair", &[("rawWmCategory", "emergency_roadside_repair")], 804),
    rule("roadside assistance", &[("rawWmCategory", "roadside_assistance")], 804),
    rule("mandal", &[("rawWmCategory", "mandal")], 804),
    rule("1967_construction", &[("rawWmCategory", "1967_construction")], 804),
    rule("taluka / taluk", &[("rawWmCategory", "taluka_/_taluk")], 804),
    rule("tehsil", &[("rawWmCategory", "tehsil")], 804),
    rule("package delivery", &[("rawWmCategory", "package_delivery")], 801),
    rule("microwave tower / microwave transmission", &[("rawWmCategory", "microwave_tower_/_microwave_transmission")], 798),
    rule("university college", &[("rawWmCategory", "university_college")], 796),
    rule("courier", &[("rawWmCategory", "courier")], 793),
    rule("Carrefour", &[("rawWmCategory", "Carrefour")], 790),
    rule("1970_construction", &[("historic:period", "1970_construction")], 789),
    rule("second level parliament", &[("rawWmCategory", "second_level_parliament")], 787),
    rule("irrigation", &[("rawWmCategory", "irrigation")], 787),
    rule("lienzo", &[("rawWmCategory", "lienzo")], 785),
    rule("cram school", &[("rawWmCategory", "cram_school")], 783),
    rule("tutoring services", &[("rawWmCategory", "tutoring_services")], 783),
    rule("passport office", &[("rawWmCategory", "passport_office")], 782),
    rule("portal", &[("rawWmCategory", "portal")], 782),
    rule("indoor bowls", &[("sport", "indoor_bowls")], 777),
    rule("bowling green", &[("leisure", "pitch"), ("sport", "bowls")], 777),
    rule("lawn bowls", &[("sport", "bowls")], 777),
    rule("marine mammal park", &[("rawWmCategory", "marine_mammal_park")], 776),
    rule("Amtrak", &[("rawWmCategory", "Amtrak")], 776),
    rule("public aquarium / oceanarium / seaquarium", &[("rawWmCategory", "public_aquarium_/_oceanarium_/_seaquarium")], 776),
    rule("surgery", &[("rawWmCategory", "surgery")], 775),
    rule("PrivatBank", &[("rawWmCategory", "PrivatBank")], 773),
    rule("mess", &[("rawWmCategory", "mess")], 772),
    rule("7-Eleven", &[("shop", "convenience"), ("name", "7-Eleven")], 768),
    rule("Banco Bradesco", &[("rawWmCategory", "Banco_Bradesco")], 768),
    rule("Aldi", &[("rawWmCategory", "Aldi")], 763),
    rule("indoor ice rink", &[("leisure", "ice_rink")], 760),
    rule("pesantren (islamic boarding school)", &[("rawWmCategory", "pesantren_(islamic_boarding_school)")], 759),
    rule("safety", &[("rawWmCategory", "safety")], 759),
    rule("harbour", &[("landuse", "harbour")], 755),
    rule("harbor", &[("landuse", "harbour")], 755),
    rule("haven", &[("rawWmCategory", "haven")], 755),
    rule("Hilton Worldwide", &[("rawWmCategory", "Hilton_Worldwide")], 752),
    rule("football fourth league", &[("rawWmCategory", "football_fourth_league")], 750),
    rule("watermill", &[("man_made", "watermill")], 748),
    rule("covered bridge", &[("bridge", "covered")], 748),
    rule("Arby&#039;s", &[("amenity", "fast_food"), ("cuisine", "burger"), ("name", "Arby's"), ("brand", "Arby's")], 748),
    rule("linen", &[("rawWmCategory", "linen")], 745),
    rule("scenic lookout", &[("tourism", "view_point")], 742),
    rule("basilica", &[("rawWmCategory", "basilica")], 740),
    rule("Banco Itau", &[("rawWmCategory", "Banco_Itau")], 737),
    rule("yoga", &[("sport", "yoga")], 736),
    rule("adult education", &[("rawWmCategory", "adult_education")], 735),
    rule("space agency", &[("rawWmCategory", "space_agency")], 733),
    rule("maternity welfare center", &[("rawWmCategory", "maternity_welfare_center")], 731),
    rule("bench (furniture)", &[("rawWmCategory", "bench_(furniture)")], 731),
    rule("hellenic", &[("rawWmCategory", "hellenic")], 730),
    rule("professional development", &[("rawWmCategory", "professional_development")], 729),
    rule("road tunnel", &[("rawWmCategory", "road_tunnel")], 728),
    rule("gravel pit", &[("rawWmCategory", "gravel_pit")], 726),
    rule("agro-town", &[("rawWmCategory", "agro-town")], 726),
    rule("1968_construction", &[("historic:period", "1968_construction")], 726),
    rule("curtains", &[("rawWmCategory", "curtains")], 726),
    rule("lodging", &[("rawWmCategory", "lodging")], 725),
    rule("building society", &[("rawWmCategory", "building_society")], 725),
    rule("ditch", &[("rawWmCategory", "ditch")], 725),
    rule("Housing Development Board", &[("rawWmCategory", "Housing_Development_Board")], 722),
    rule("cellar", &[("rawWmCategory", "cellar")], 721),
    rule("representation", &[("rawWmCategory", "representation")], 720),
    rule("oil refinery", &[("rawWmCategory", "oil_refinery")], 719),
    rule("petroleum refinery", &[("rawWmCategory", "petroleum_refinery")], 719),
    rule("investment", &[("rawWmCategory", "investment")], 719),
    rule("pipe bridge", &[("rawWmCategory", "pipe_bridge")], 718),
    rule("Perumal temple", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 717),
    rule("Vishnalayam", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 717),
    rule("Vishnu temple", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 717),
    rule("jewish cemetery", &[("landuse", "cemetery"), ("religion", "jewish")], 717),
    rule("American Civil War 1861-1865", &[("rawWmCategory", "American_Civil_War_1861-1865")], 717),
    rule("rugby ground", &[("leisure", "pitch"), ("sport", "rugby")], 716),
    rule("wasteland", &[("rawWmCategory", "wasteland")], 714),
    rule("ILS - instrument landing system", &[("navigationaid", "ils")], 714),
    rule("olive oil mill", &[("landuse", "industrial"), ("industrial", "mill"), ("product", "olive_oil")], 712),
    rule("palm oil mill", &[("landuse", "industrial"), ("industrial", "mill"), ("product", "palm_oil")], 712),
    rule("oil mill", &[("landuse", "industrial"), ("industrial", "mill"), ("product", "oil")], 712),
    rule("vegetable oil mill", &[("landuse", "industrial"), ("industrial", "mill"), ("product", "vegetable_oil")], 712),
    rule("vocational courses", &[("rawWmCategory", "vocational_courses")], 711),
    rule("girls school", &[("rawWmCategory", "girls_school")], 710),
    rule("arts and crafts store", &[("rawWmCategory", "arts_and_crafts_store")], 709),
    rule("sandwich bar/sandwich wrap shop", &[("rawWmCategory", "sandwich_bar/sandwich_wrap_shop")], 708),
    rule("confectionery plant", &[("rawWmCategory", "confectionery_plant")], 708),
    rule("United States Coast Guard", &[("rawWmCategory", "United_States_Coast_Guard")], 707),
    rule("geodetics", &[("rawWmCategory", "geodetics")], 706),
    rule("community college", &[("rawWmCategory", "community_college")], 705),
    rule("forest nursery", &[("rawWmCategory", "forest_nursery")], 705),
    rule("tattoo shop", &[("rawWmCategory", "tattoo_shop")], 703),
    rule("tattoo parlor / studio", &[("rawWmCategory", "tattoo_parlor_/_studio")], 703),
    rule("cogeneration power plant", &[("rawWmCategory", "cogeneration_power_plant")], 702),
    rule("farmers market", &[("rawWmCategory", "farmers_market")], 702),
    rule("combined heat and power plant", &[("rawWmCategory", "combined_heat_and_power_plant")], 702),
    rule("oil platform", &[("rawWmCategory", "oil_platform")], 701),
    rule("offshore oil rig", &[("rawWmCategory", "offshore_oil_rig")], 701),
    rule("1974_construction", &[("historic:period", "1974_construction")], 701),
    rule("1969_construction", &[("historic:period", "1969_construction")], 700),
    rule("apiary", &[("rawWmCategory", "apiary")], 699),
    rule("metalware", &[("rawWmCategory", "metalware")], 699),
    rule("dancing - DONT USE - CATEGORY WILL BE REMOVED", &[("rawWmCategory", "dancing_-_DONT_USE_-_CATEGORY_WILL_BE_REMOVED")], 698),
    rule("Oschadbank", &[("rawWmCategory", "Oschadbank")], 698),
    rule("dance - DONT USE - CATEGORY WILL BE REMOVED", &[("rawWmCategory", "dance_-_DONT_USE_-_CATEGORY_WILL_BE_REMOVED")], 698),
    rule("party goods supplier", &[("rawWmCategory", "party_goods_supplier")], 697),
    rule("1972_construction", &[("historic:period", "1972_construction")], 696),
    rule("woodland", &[("rawWmCategory", "woodland")], 695),
    rule("coppice", &[("rawWmCategory", "coppice")], 695),
    rule("alpine hut", &[("rawWmCategory", "alpine_hut")], 694),
    rule("mountain hostel", &[("rawWmCategory", "mountain_hostel")], 694),
    rule("mountain shelter", &[("rawWmCategory", "mountain_shelter")], 694),
    rule("mountain hut", &[("rawWmCategory", "mountain_hut")], 694),
    rule("caixa economica federal", &[("rawWmCategory", "caixa_economica_federal")], 693),
    rule("bastion (fortification part)", &[("rawWmCategory", "bastion_(fortification_part)")], 692),
    rule("tea and coffee merchants", &[("rawWmCategory", "tea_and_coffee_merchants")], 692),
    rule("church hall", &[("rawWmCategory", "church_hall")], 691),
    rule("parish hall", &[("rawWmCategory", "parish_hall")], 691),
    rule("Lowes", &[("shop", "doityourself"), ("name", "Lowes")], 691),
    rule("Lowe's", &[("shop", "doityourself"), ("name", "Lowes")], 691),
    rule("astronomy", &[("rawWmCategory", "astronomy")], 691),
    rule("astronomical", &[("rawWmCategory", "astronomical")], 691),
    rule("Taras Shevchenko", &[("rawWmCategory", "Taras_Shevchenko")], 690),
    rule("information centre", &[("rawWmCategory", "information_centre")], 689),
    rule("trailhead", &[("rawWmCategory", "trailhead")], 688),
    rule("balneario", &[("rawWmCategory", "balneario")], 685),
    rule("history museum", &[("rawWmCategory", "history_museum")], 685),
    rule("visitor / park center", &[("rawWmCategory", "visitor_/_park_center")], 685),
    rule("benchmark (survey)", &[("rawWmCategory", "benchmark_(survey)")], 684),
    rule("artillery", &[("rawWmCategory", "artillery")], 683),
    rule("webcam", &[("rawWmCategory", "webcam")], 683),
    rule("home electronics / appliance repair service", &[("rawWmCategory", "home_electronics_/_appliance_repair_service")], 683),
    rule("cam", &[("rawWmCategory", "cam")], 683),
    rule("coaching", &[("rawWmCategory", "coaching")], 683),
    rule("shawarma/ doner kebab/ gyros", &[("rawWmCategory", "shawarma/_doner_kebab/_gyros")], 682),
    rule("former air force base", &[("rawWmCategory", "former_air_force_base")], 681),
    rule("locomotive on display", &[("rawWmCategory", "locomotive_on_display")], 681),
    rule("1957_construction", &[("historic:period", "1957_construction")], 681),
    rule("borehole", &[("rawWmCategory", "borehole")], 679),
    rule("intelligence agency", &[("rawWmCategory", "intelligence_agency")], 679),
    rule("borewell", &[("rawWmCategory", "borewell")], 679),
    rule("truck repair", &[("rawWmCategory", "truck_repair")], 678),
    rule("NASA", &[("rawWmCategory", "NASA")], 678),
    rule("music instruments", &[("rawWmCategory", "music_instruments")], 677),
    rule("river delta", &[("rawWmCategory", "river_delta")], 677),
    rule("strategic rocket forces", &[("rawWmCategory", "strategic_rocket_forces")], 676),
    rule("radio beacon", &[("rawWmCategory", "radio_beacon")], 675),
    rule("green - TO BE REMOVED", &[("rawWmCategory", "green_-_TO_BE_REMOVED")], 672),
    rule("health/organic food store", &[("rawWmCategory", "health/organic_food_store")], 671),
    rule("bungalow park", &[("rawWmCategory", "bungalow_park")], 670),
    rule("nunnery", &[("rawWmCategory", "nunnery")], 670),
    rule("broadcasting", &[("rawWmCategory", "broadcasting")], 669),
    rule("environmental organisation", &[("rawWmCategory", "environmental_organisation")], 668),
    rule("environmental protection agency", &[("rawWmCategory", "environmental_protection_agency")], 668),
    rule("multistorey", &[("rawWmCategory", "multistorey")], 668),
    rule("environmental organization", &[("rawWmCategory", "environmental_organization")], 668),
    rule("dentistry", &[("rawWmCategory", "dentistry")], 666),
    rule("menswear", &[("rawWmCategory", "menswear")], 666),
    rule("scrap metal dealer", &[("rawWmCategory", "scrap_metal_dealer")], 665),
    rule("festas", &[("rawWmCategory", "festas")], 664),
    rule("churrascaria", &[("rawWmCategory", "churrascaria")], 664),
    rule("2013_construction", &[("historic:period", "2013_construction")], 662),
    rule("women's / girls college", &[("rawWmCategory", "womens_/_girls_college")], 661),
    rule("1971_construction", &[("historic:period", "1971_construction")], 661),
    rule("masonic hall", &[("rawWmCategory", "masonic_hall")], 661),
    rule("freemason / masonic temple", &[("amenity", "place_of_worship"), ("rawWmCategory", "freemason_/_masonic_temple")], 661),
    rule("masonic building", &[("rawWmCategory", "masonic_building")], 661),
    rule("backwater", &[("rawWmCategory", "backwater")], 658),
    rule("equipment rental", &[("rawWmCategory", "equipment_rental")], 656),
    rule("oil change station", &[("rawWmCategory", "oil_change_station")], 655),
    rule("cenote", &[("rawWmCategory", "cenote")], 655),
    rule("Episcopal Church", &[("amenity", "place_of_worship"), ("religion", "christian"), ("denomination", "episcopal"), ("building", "church")], 653),
    rule("roller coaster", &[("rawWmCategory", "roller_coaster")], 652),
    rule("traction substation of public transport", &[("rawWmCategory", "traction_substation_of_public_transport")], 650),
    rule("deck", &[("rawWmCategory", "deck")], 650),
    rule("chawl", &[("rawWmCategory", "chawl")], 650),
    rule("textiles", &[("rawWmCategory", "textiles")], 648),
    rule("concert", &[("rawWmCategory", "concert")], 645),
    rule("concerts", &[("rawWmCategory", "concerts")], 645),
    rule("steel - to be removed", &[("rawWmCategory", "steel_-_to_be_removed")], 644),
    rule("bookie", &[("rawWmCategory", "bookie")], 643),
    rule("bookmaker", &[("rawWmCategory", "bookmaker")], 643),
    rule("bus rapid transit (BRT) station", &[("rawWmCategory", "bus_rapid_transit_(BRT)_station")], 643),
    rule("provincial", &[("rawWmCategory", "provincial")], 643),
    rule("webdevelopment", &[("rawWmCategory", "webdevelopment")], 643),
    rule("betting shop", &[("rawWmCategory", "betting_shop")], 643),
    rule("province", &[("rawWmCategory", "province")], 643),
    rule("1980_construction", &[("historic:period", "1980_construction")], 642),
    rule("boating", &[("rawWmCategory", "boating")], 641),
    rule("alternative education", &[("rawWmCategory", "alternative_education")], 639),
    rule("professional organisation / association", &[("rawWmCategory", "professional_organisation_/_association")], 639),
    rule("adult - to be replaced / deleted", &[("rawWmCategory", "adult_-_to_be_replaced_/_deleted")], 638),
    rule("data center", &[("rawWmCategory", "data_center")], 638),
    rule("paddle tennis / padel court", &[("rawWmCategory", "paddle_tennis_/_padel_court")], 638),
    rule("data centre", &[("rawWmCategory", "data_centre")], 638),
    rule("general store", &[("rawWmCategory", "general_store")], 637),
    rule("general merchandise store", &[("rawWmCategory", "general_merchandise_store")], 637),
    rule("builders merchant", &[("rawWmCategory", "builders_merchant")], 637),
    rule("grazing area", &[("rawWmCategory", "grazing_area")], 636),
    rule("pasture", &[("rawWmCategory", "pasture")], 636),
    rule("dunes", &[("rawWmCategory", "dunes")], 634),
    rule("video game console store / shop", &[("rawWmCategory", "video_game_console_store_/_shop")], 632),
    rule("video games store / shop", &[("rawWmCategory", "video_games_store_/_shop")], 632),
    rule("field camp", &[("rawWmCategory", "field_camp")], 631),
    rule("1973_construction", &[("historic:period", "1973_construction")], 631),
    rule("lingerie shop", &[("rawWmCategory", "lingerie_shop")], 631),
    rule("multipurpose", &[("rawWmCategory", "multipurpose")], 630),
    rule("sub-bairro", &[("rawWmCategory", "sub-bairro")], 629),
    rule("rice", &[("rawWmCategory", "rice")], 629),
    rule("butte", &[("rawWmCategory", "butte")], 628),
    rule("discounter", &[("rawWmCategory", "discounter")], 628),
    rule("open-air cage", &[("rawWmCategory", "open-air_cage")], 627),
    rule("prostitution place / area", &[("rawWmCategory", "prostitution_place_/_area")], 627),
    rule("humane society", &[("rawWmCategory", "humane_society")], 626),
    rule("animal shelter", &[("rawWmCategory", "animal_shelter")], 626),
    rule("coal-fired", &[("rawWmCategory", "coal-fired")], 625),
    rule("skyway", &[("rawWmCategory", "skyway")], 624),
    rule("sky walk", &[("rawWmCategory", "sky_walk")], 624),
    rule("department - administrative division", &[("rawWmCategory", "department_-_administrative_division")], 623),
    rule("Native American", &[("rawWmCategory", "Native_American")], 622),
    rule("gord (fort)", &[("rawWmCategory", "gord_(fort)")], 620),
    rule("first-level administrative division", &[("boundary", "administrative"), ("admin_level", "1")], 619),
    rule("uninhabited island", &[("rawWmCategory", "uninhabited_island")], 617),
    rule("desert island", &[("rawWmCategory", "desert_island")], 617),
    rule("giants' grave", &[("rawWmCategory", "giants_grave")], 614),
    rule("1975_construction", &[("historic:period", "1975_construction")], 614),
    rule("trench", &[("rawWmCategory", "trench")], 614),
    rule("Chinese temple", &[("amenity", "place_of_worship"), ("religion", "chinese"), ("building", "temple")], 612),
    rule("architect", &[("office", "architect")], 612),
    rule("service academy", &[("amenity", "college"), ("military", "yes")], 612),
    rule("military academy", &[("amenity", "college"), ("military", "yes")], 612),
    rule("2008_construction", &[("historic:period", "2008_construction")], 610),
    rule("1979_construction", &[("historic:period", "1979_construction")], 609),
    rule("landline telephone service provider", &[("rawWmCategory", "landline_telephone_service_provider")], 608),
    rule("aircraft museum", &[("amenity", "museum"), ("subject", "aircraft")], 606),
    rule("aviation museum", &[("amenity", "museum"), ("subject", "aircraft")], 606),
    rule("aerospace museum", &[("amenity", "museum"), ("subject", "aircraft")], 606),
    rule("dismantled", &[("dismantled", "yes")], 606),
    rule("air museum", &[("amenity", "museum"), ("subject", "aircraft")], 606),
    rule("Neo-Gothic architecture", &[("building:architecture", "neo-gothic")], 605),
    rule("Gothic revival architecture", &[("building:architecture", "gothic_revival")], 605),
    rule("Victorian Gothic architecture", &[("building:architecture", "victorian_gothic")], 605),
    rule("Ford car dealer", &[("rawWmCategory", "Ford_car_dealer")], 605),
    rule("barrage", &[("rawWmCategory", "barrage")], 605),
    rule("megalithic tomb", &[("rawWmCategory", "megalithic_tomb")], 602),
    rule("aquatic center", &[("rawWmCategory", "aquatic_center")], 601),
    rule("leisure centre", &[("rawWmCategory", "leisure_centre")], 601),
    rule("1977_construction", &[("historic:period", "1977_construction")], 601),
    rule("pyramid", &[("rawWmCategory", "pyramid")], 600),
    rule("Exxon Mobil", &[("rawWmCategory", "Exxon_Mobil")], 599),
    rule("bags", &[("rawWmCategory", "bags")], 597),
    rule("swing", &[("rawWmCategory", "swing")], 597),
    rule("mohalla", &[("rawWmCategory", "mohalla")], 596),
    rule("muhalla", &[("rawWmCategory", "muhalla")], 596),
    rule("mohallah", &[("rawWmCategory", "mohallah")], 596),
    rule("Anglican church", &[("amenity", "place_of_worship"), ("religion", "christian"), ("denomination", "anglican"), ("building", "church")], 594),
    rule("flying club", &[("rawWmCategory", "flying_club")], 593),
    rule("gliding club", &[("rawWmCategory", "gliding_club")], 593),
    rule("aero club", &[("rawWmCategory", "aero_club")], 593),
    rule("glass industry", &[("rawWmCategory", "glass_industry")], 593),
    rule("bikini bar", &[("rawWmCategory", "bikini_bar")], 592),
    rule("industrial park", &[("rawWmCategory", "industrial_park")], 592),
    rule("strip club", &[("rawWmCategory", "strip_club")], 592),
    rule("badminton court", &[("rawWmCategory", "badminton_court")], 591),
    rule("chiropractor", &[("rawWmCategory", "chiropractor")], 590),
    rule("observation", &[("rawWmCategory", "observation")], 589),
    rule("locksmith / key cutter", &[("rawWmCategory", "locksmith_/_key_cutter")], 587),
    rule("coal storage/terminal", &[("rawWmCategory", "coal_storage/terminal")], 586),
    rule("nuclear reactor", &[("rawWmCategory", "nuclear_reactor")], 586),
    rule("flea market", &[("rawWmCategory", "flea_market")], 586),
    rule("pylon", &[("pylon", "yes")], 586),
    rule("2012_construction", &[("historic:period", "2012_construction")], 585),
    rule("Check Dam", &[("rawWmCategory", "Check_Dam")], 585),
    rule("spit/sandspit", &[("rawWmCategory", "spit/sandspit")], 585),
    rule("1880s construction", &[("historic:period", "1880s_construction")], 584),
    rule("tax preparation service", &[("rawWmCategory", "tax_preparation_service")], 584),
    rule("income tax preparation service", &[("rawWmCategory", "income_tax_preparation_service")], 584),
    rule("bairro rural", &[("rawWmCategory", "bairro_rural")], 583),
    rule("compressor station", &[("rawWmCategory", "compressor_station")], 583),
    rule("bathroom / shower facility", &[("rawWmCategory", "bathroom_/_shower_facility")], 581),
    rule("1981_construction", &[("historic:period", "1981_construction")], 581),
    rule("cng", &[("rawWmCategory", "cng")], 581),
    rule("paper mill", &[("rawWmCategory", "paper_mill")], 581),
    rule("mobile phone repair", &[("rawWmCategory", "mobile_phone_repair")], 580),
    rule("costume jewelry", &[("rawWmCategory", "costume_jewelry")], 580),
    rule("cellphone repair", &[("rawWmCategory", "cellphone_repair")], 580),
    rule("paragliding", &[("rawWmCategory", "paragliding")], 577),
    rule("recorder of deeds", &[("rawWmCategory", "recorder_of_deeds")], 576),
    rule("land registry office", &[("rawWmCategory", "land_registry_office")], 576),
    rule("registrar of deeds", &[("rawWmCategory", "registrar_of_deeds")], 576),
    rule("bullring", &[("rawWmCategory", "bullring")], 574),
    rule("computer education", &[("rawWmCategory", "computer_education")], 573),
    rule("computer training institute", &[("rawWmCategory", "computer_training_institute")], 573),
    rule("1976_construction", &[("historic:period", "1976_construction")], 573),
    rule("provider - TO BE REMOVED", &[("rawWmCategory", "provider_-_TO_BE_REMOVED")], 571),
    rule("handling", &[("rawWmCategory", "handling")], 571),
    rule("travel / outdoor shop", &[("rawWmCategory", "travel_/_outdoor_shop")], 570),
    rule("entreprise", &[("rawWmCategory", "entreprise")], 569),
    rule("liquefied petroleum gas (LPG)", &[("rawWmCategory", "liquefied_petroleum_gas_(LPG)")], 569),
    rule("gpl", &[("rawWmCategory", "gpl")], 569),
    rule("Leclerc", &[("rawWmCategory", "Leclerc")], 568),
    rule("letter box", &[("rawWmCategory", "letter_box")], 567),
    rule("pillar box", &[("rawWmCategory", "pillar_box")], 567),
    rule("post box", &[("rawWmCategory", "post_box")], 567),
    rule("mailbox", &[("rawWmCategory", "mailbox")], 567),
    rule("light rail", &[("rawWmCategory", "light_rail")], 567),
    rule("postbox", &[("rawWmCategory", "postbox")], 567),
    rule("GULAG", &[("rawWmCategory", "GULAG")], 566),
    rule("enhanced education", &[("rawWmCategory", "enhanced_education")], 565),
    rule("1978_construction", &[("historic:period", "1978_construction")], 565),
    rule("Functionalism architecture", &[("building:architecture", "functionalism")], 565),
    rule("firefighting equipment", &[("rawWmCategory", "firefighting_equipment")], 564),
    rule("rock/ pop music venue", &[("rawWmCategory", "rock/_pop_music_venue")], 564),
    rule("dermatology clinic / skin clinic", &[("rawWmCategory", "dermatology_clinic_/_skin_clinic")], 562),
    rule("dermatologist", &[("rawWmCategory", "dermatologist")], 562),
    rule("dermatology hospital", &[("rawWmCategory", "dermatology_hospital")], 562),
    rule("dermatology", &[("rawWmCategory", "dermatology")], 562),
    rule("underwater", &[("rawWmCategory", "underwater")], 562),
    rule("rowhouse", &[("rawWmCategory", "rowhouse")], 561),
    rule("forest ranger's house/park ranger's house", &[("rawWmCategory", "forest_rangers_house/park_rangers_house")], 560),
    rule("forest ranger's office", &[("rawWmCategory", "forest_rangers_office")], 560),
    rule("rotunda", &[("rawWmCategory", "rotunda")], 559),
    rule("school of management / business school", &[("rawWmCategory", "school_of_management_/_business_school")], 557),
    rule("brick gothic architecture", &[("building:architecture", "brick_gothic")], 557),
    rule("reinforced concrete structures", &[("rawWmCategory", "reinforced_concrete_structures")], 556),
    rule("mattress", &[("rawWmCategory", "mattress")], 556),
    rule("industrial equipment", &[("rawWmCategory", "industrial_equipment")], 555),
    rule("receptions", &[("rawWmCategory", "receptions")], 552),
    rule("reception", &[("rawWmCategory", "reception")], 552),
    rule("natural gas compressor station", &[("rawWmCategory", "natural_gas_compressor_station")], 551),
    rule("meeting house", &[("rawWmCategory", "meeting_house")], 551),
    rule("gateway", &[("rawWmCategory", "gateway")], 551),
    rule("natural gas pumping station", &[("rawWmCategory", "natural_gas_pumping_station")], 551),
    rule("factory outlet", &[("rawWmCategory", "factory_outlet")], 549),
    rule("personal", &[("rawWmCategory", "personal")], 549),
    rule("outlet store", &[("rawWmCategory", "outlet_store")], 549),
    rule("classicism", &[("rawWmCategory", "classicism")], 548),
    rule("car racing track", &[("rawWmCategory", "car_racing_track")], 547),
    rule("motor racing track", &[("rawWmCategory", "motor_racing_track")], 547),
    rule("auto racing track", &[("rawWmCategory", "auto_racing_track")], 547),
    rule("equestrian statue", &[("rawWmCategory", "equestrian_statue")], 546),
    rule("Armenian Apostolic church", &[("amenity", "place_of_worship"), ("religion", "christian"), ("denomination", "armenian_apostolic"), ("building", "church")], 546),
    rule("biedronka", &[("rawWmCategory", "biedronka")], 545),
    rule("elderate", &[("rawWmCategory", "elderate")], 545),
    rule("eldership", &[("rawWmCategory", "eldership")], 545),
    rule("telegraph", &[("rawWmCategory", "telegraph")], 545),
    rule("fashion accessories store / shop", &[("rawWmCategory", "fashion_accessories_store_/_shop")], 544),
    rule("poblado", &[("rawWmCategory", "poblado")], 544),
    rule("haberdashery", &[("rawWmCategory", "haberdashery")], 542),
    rule("pilgrimage", &[("rawWmCategory", "pilgrimage")], 542),
    rule("necropolis", &[("rawWmCategory", "necropolis")], 542),
    rule("office equipment", &[("rawWmCategory", "office_equipment")], 541),
    rule("lift - elevator", &[("rawWmCategory", "lift_-_elevator")], 541),
    rule("earthquake epicenter", &[("rawWmCategory", "earthquake_epicenter")], 541),
    rule("call center / contact center", &[("rawWmCategory", "call_center_/_contact_center")], 539),
    rule("call centre", &[("rawWmCategory", "call_centre")], 539),
    rule("callcenter", &[("rawWmCategory", "callcenter")], 539),
    rule("truck dealer", &[("rawWmCategory", "truck_dealer")], 534),
    rule("mailing service", &[("rawWmCategory", "mailing_service")], 532),
    rule("art deco architectural style", &[("building:architecture", "art_deco")], 532),
    rule("1983_construction", &[("historic:period", "1983_construction")], 531),
    rule("yacht", &[("rawWmCategory", "yacht")], 531),
    rule("legislature", &[("rawWmCategory", "legislature")], 531),
    rule("parliament", &[("rawWmCategory", "parliament")], 531),
    rule("velodrome", &[("rawWmCategory", "velodrome")], 530),
    rule("Tim Hortons", &[("rawWmCategory", "Tim_Hortons")], 529),
    rule("Old Believers", &[("rawWmCategory", "Old_Believers")], 528),
    rule("recovery of waste", &[("rawWmCategory", "recovery_of_waste")], 528),
    rule("cinder cone", &[("rawWmCategory", "cinder_cone")], 528),
    rule("climbing", &[("sport", "climbing")], 525),
    rule("lanhouse", &[("rawWmCategory", "lanhouse")], 525),
    rule("polytechnic", &[("rawWmCategory", "polytechnic")], 525),
    rule("disability organization", &[("rawWmCategory", "disability_organization")], 524),
    rule("money transfer", &[("rawWmCategory", "money_transfer")], 524),
    rule("1982_construction", &[("historic:period", "1982_construction")], 523),
    rule("parachuting", &[("rawWmCategory", "parachuting")], 522),
    rule("Neoclassical architecture", &[("building:architecture", "neoclassical")], 522),
    rule("skydiving", &[("rawWmCategory", "skydiving")], 522),
    rule("graphic design", &[("rawWmCategory", "graphic_design")], 521),
    rule("welding", &[("rawWmCategory", "welding")], 521),
    rule("dharamshala", &[("rawWmCategory", "dharamshala")], 521),
    rule("swimming pool store", &[("rawWmCategory", "swimming_pool_store")], 520),
    rule("rubber", &[("rawWmCategory", "rubber")], 520),
    rule("retreat centre (spiritual)", &[("rawWmCategory", "retreat_centre_(spiritual)")], 518),
    rule("reception hall", &[("rawWmCategory", "reception_hall")], 518),
    rule("Toyota", &[("rawWmCategory", "Toyota")], 518),
    rule("foyer", &[("rawWmCategory", "foyer")], 518),
    rule("universal church of the kingdom of god", &[("rawWmCategory", "universal_church_of_the_kingdom_of_god")], 518),
    rule("shinto shrine", &[("rawWmCategory", "shinto_shrine")], 518),
    rule("lobby (room)", &[("rawWmCategory", "lobby_(room)")], 518),
    rule("retreat center (spiritual)", &[("rawWmCategory", "retreat_center_(spiritual)")], 518),
    rule("stormwater", &[("rawWmCategory", "stormwater")], 518),
    rule("taxi service", &[("rawWmCategory", "taxi_service")], 516),
    rule("Honda", &[("rawWmCategory", "Honda")], 516),
    rule("instruments", &[("rawWmCategory", "instruments")], 516),
    rule("pontoon bridge", &[("rawWmCategory", "pontoon_bridge")], 515),
    rule("sandbox", &[("rawWmCategory", "sandbox")], 515),
    rule("1987_construction", &[("historic:period", "1987_construction")], 514),
    rule("fen (wetland)", &[("rawWmCategory", "fen_(wetland)")], 514),
    rule("студія звукозапису", &[("rawWmCategory", "студія_звукозапису")], 513),
    rule("psychotherapy", &[("rawWmCategory", "psychotherapy")], 513),
    rule("recording studio", &[("rawWmCategory", "recording_studio")], 513),
    rule("architectural organization", &[("rawWmCategory", "architectural_organization")], 512),
    rule("automation", &[("rawWmCategory", "automation")], 512),
    rule("rubbish / refuse / garbage dump", &[("rawWmCategory", "rubbish_/_refuse_/_garbage_dump")], 511),
    rule("sports hall", &[("rawWmCategory", "sports_hall")], 510),
    rule("diagnostic center", &[("rawWmCategory", "diagnostic_center")], 510),
    rule("diagnostic centre", &[("rawWmCategory", "diagnostic_centre")], 510),
    rule("sports bar", &[("rawWmCategory", "sports_bar")], 509),
    rule("2011_construction", &[("historic:period", "2011_construction")], 508),
    rule("asilo", &[("rawWmCategory", "asilo")], 508),
    rule("enclave", &[("rawWmCategory", "enclave")], 507),
    rule("chamber of commerce", &[("rawWmCategory", "chamber_of_commerce")], 506),
    rule("magistrates' court", &[("rawWmCategory", "magistrates_court")], 506),
    rule("labyrinth / maze", &[("rawWmCategory", "labyrinth_/_maze")], 506),
    rule("Thai cuisine", &[("rawWmCategory", "Thai_cuisine")], 505),
    rule("polygon art", &[("rawWmCategory", "polygon_art")], 503),
    rule("2007_construction", &[("historic:period", "2007_construction")], 503),
    rule("rowing", &[("rawWmCategory", "rowing")], 502),
    rule("event management company", &[("rawWmCategory", "event_management_company")], 501),
    rule("event manager", &[("rawWmCategory", "event_manager")], 501),
    rule("Greek Revival style architecture", &[("building:architecture", "greek_revival")], 500),
    rule("knitwear", &[("rawWmCategory", "knitwear")], 499),
    rule("Kroger", &[("rawWmCategory", "Kroger")], 499),
    rule("Purok", &[("rawWmCategory", "Purok")], 498),
    rule("Philippine/Filipino cuisine", &[("rawWmCategory", "Philippine/Filipino_cuisine")], 498),
    rule("eternal flame", &[("rawWmCategory", "eternal_flame")], 497),
    rule("Cold War 1947-1991", &[("rawWmCategory", "Cold_War_1947-1991")], 497),
    rule("bathing ghat", &[("rawWmCategory", "bathing_ghat")], 495),
    rule("1953_construction", &[("historic:period", "1953_construction")], 494),
    rule("refrigeration", &[("rawWmCategory", "refrigeration")], 494),
    rule("1984_construction", &[("historic:period", "1984_construction")], 494),
    rule("Marriott Hotels and Resorts", &[("rawWmCategory", "Marriott_Hotels_and_Resorts")], 493),
    rule("physiotherapist", &[("rawWmCategory", "physiotherapist")], 490),
    rule("physical therapy", &[("rawWmCategory", "physical_therapy")], 490),
    rule("physiotherapy", &[("rawWmCategory", "physiotherapy")], 490),
    rule("electrical contractor / electricians", &[("rawWmCategory", "electrical_contractor_/_electricians")], 489),
    rule("military museum", &[("rawWmCategory", "military_museum")], 488),
    rule("1956_construction", &[("historic:period", "1956_construction")], 488),
    rule("war museum", &[("rawWmCategory", "war_museum")], 488),
    rule("park and ride", &[("rawWmCategory", "park_and_ride")], 487),
    rule("1988_construction", &[("historic:period", "1988_construction")], 487),
    rule("tacos", &[("rawWmCategory", "tacos")], 487),
    rule("2010_construction", &[("historic:period", "2010_construction")], 482),
    rule("gram panchayat office", &[("rawWmCategory", "gram_panchayat_office")], 481),
    rule("boathouse", &[("rawWmCategory", "boathouse")], 481),
    rule("collective zone", &[("rawWmCategory", "collective_zone")], 480),
    rule("roofing supplies", &[("rawWmCategory", "roofing_supplies")], 480),
    rule("cultural heritage / national heritage", &[("rawWmCategory", "cultural_heritage_/_national_heritage")], 478),
    rule("2009_construction", &[("rawWmCategory", "2009_construction")], 477),
    rule("vegetarian restaurant", &[("rawWmCategory", "vegetarian_restaurant")], 477),
    rule("apparel", &[("rawWmCategory", "apparel")], 477),
    rule("copper mine", &[("rawWmCategory", "copper_mine")], 475),
    rule("1955_construction", &[("historic:period", "1955_construction")], 474),
    rule("retransmission", &[("rawWmCategory", "retransmission")], 474),
    rule("leading beacon", &[("rawWmCategory", "leading_beacon")], 473),
    rule("dry lake", &[("rawWmCategory", "dry_lake")], 473),
    rule("Sonic Drive-In", &[("rawWmCategory", "Sonic_Drive-In")], 473),
    rule("Dairy Queen", &[("rawWmCategory", "Dairy_Queen")], 473),
    rule("embankment", &[("rawWmCategory", "embankment")], 471),
    rule("blacksmith's workshop / forge", &[("rawWmCategory", "blacksmiths_workshop_/_forge")], 471),
    rule("1985_construction", &[("historic:period", "1985_construction")], 471),
    rule("veterinary pharmacy", &[("rawWmCategory", "veterinary_pharmacy")], 470),
    rule("16th century construction", &[("rawWmCategory", "16th_century_construction")], 469),
    rule("detention centre", &[("rawWmCategory", "detention_centre")], 468),
    rule("detention center", &[("rawWmCategory", "detention_center")], 468),
    rule("1986_construction", &[("historic:period", "1986_construction")], 467),
    rule("narcology", &[("rawWmCategory", "narcology")], 467),
    rule("olympic venue", &[("rawWmCategory", "olympic_venue")], 467),
    rule("cabin", &[("rawWmCategory", "cabin")], 466),
    rule("senior citizen center", &[("rawWmCategory", "senior_citizen_center")], 465),
    rule("limestone quarry", &[("rawWmCategory", "limestone_quarry")], 464),
    rule("dental laboratory", &[("rawWmCategory", "dental_laboratory")], 463),
    rule("handball court", &[("leisure", "pitch"), ("sport", "handball")], 463),
    rule("jewelry repair", &[("rawWmCategory", "jewelry_repair")], 459),
    rule("Vietnamese cuisine", &[("amenity", "restaurant"), ("cuisine", "vietnamese")], 458),
    rule("1954_construction", &[("historic:period", "1954_construction")], 458),
    rule("TB dispensary", &[("rawWmCategory", "TB_dispensary")], 458),
    rule("Durga temple", &[("amenity", "place_of_worship"), ("rawWmCategory", "Durga_temple")], 458),
    rule("distribution point", &[("rawWmCategory", "distribution_point")], 458),
    rule("public control", &[("rawWmCategory", "public_control")], 458),
    rule("2004_construction", &[("rawWmCategory", "2004_construction")], 458),
    rule("Romanesque architecture", &[("building:architecture", "romanesque")], 458),
    rule("gynecology", &[("rawWmCategory", "gynecology")], 458),
    rule("gynaecologist", &[("rawWmCategory", "gynaecologist")], 458),
    rule("gynaecology", &[("rawWmCategory", "gynaecology")], 458),
    rule("balloon loop / turning loop", &[("rawWmCategory", "balloon_loop_/_turning_loop")], 457),
    rule("radio engineering", &[("rawWmCategory", "radio_engineering")], 457),
    rule("shooting sport", &[("rawWmCategory", "shooting_sport")], 457),
    rule("table tennis", &[("sport", "table_tennis")], 456),
    rule("truck rental", &[("rawWmCategory", "truck_rental")], 456),
    rule("ping-pong", &[("rawWmCategory", "ping-pong")], 456),
    rule("Chevron", &[("rawWmCategory", "Chevron")], 456),
    rule("optometrist", &[("rawWmCategory", "optometrist")], 456),
    rule("cotton mill", &[("rawWmCategory", "cotton_mill")], 455),
    rule("planetarium", &[("rawWmCategory", "planetarium")], 455),
    rule("power equipment", &[("rawWmCategory", "power_equipment")], 454),
    rule("tor", &[("rawWmCategory", "tor")], 454),
    rule("banco santander", &[("rawWmCategory", "banco_santander")], 453),
    rule("firearm store", &[("rawWmCategory", "firearm_store")], 453),
    rule("gun shop", &[("shop", "gun")], 453),
    rule("stone/rock feature", &[("rawWmCategory", "stone/rock_feature")], 449),
    rule("1870s construction", &[("historic:period", "1870s_construction")], 447),
    rule("marine", &[("rawWmCategory", "marine")], 447),
    rule("aluminium / aluminum", &[("rawWmCategory", "aluminium_/_aluminum")], 446),
    rule("aluminum", &[("rawWmCategory", "aluminum")], 446),
    rule("2006_construction", &[("historic:period", "2006_construction")], 445),
    rule("archipelago", &[("rawWmCategory", "archipelago")], 444),
    rule("petrochemical industry", &[("rawWmCategory", "petrochemical_industry")], 443),
    rule("feed-stuff industry", &[("rawWmCategory", "feed-stuff_industry")], 442),
    rule("chalet", &[("rawWmCategory", "chalet")], 442),
    rule("1989_construction", &[("historic:period", "1989_construction")], 442),
    rule("1952_construction", &[("historic:period", "1952_construction")], 441),
    rule("rail-trail", &[("rawWmCategory", "rail-trail")], 440),
    rule("heating and air conditioning services", &[("rawWmCategory", "heating_and_air_conditioning_services")], 439),
    rule("pollution", &[("rawWmCategory", "pollution")], 437),
    rule("smelter", &[("rawWmCategory", "smelter")], 436),
    rule("funicular / cablecar station (rail transport on the ground)", &[("rawWmCategory", "funicular_/_cablecar_station_(rail_transport_on_the_ground)")], 436),
    rule("moshav", &[("rawWmCategory", "moshav")], 435),
    rule("financial planner", &[("rawWmCategory", "financial_planner")], 434),
    rule("ramp", &[("rawWmCategory", "ramp")], 434),
    rule("financial advisor", &[("rawWmCategory", "financial_advisor")], 434),
    rule("training aids", &[("rawWmCategory", "training_aids")], 432),
    rule("obstacle course", &[("rawWmCategory", "obstacle_course")], 431),
    rule("atomic power station", &[("rawWmCategory", "atomic_power_station")], 431),
    rule("diesel generator", &[("rawWmCategory", "diesel_generator")], 431),
    rule("nuclear power plant", &[("rawWmCategory", "nuclear_power_plant")], 431),
    rule("foundry", &[("rawWmCategory", "foundry")], 431),
    rule("payday loan", &[("rawWmCategory", "payday_loan")], 430),
    rule("arboretum", &[("rawWmCategory", "arboretum")], 430),
    rule("2005_construction", &[("historic:period", "2005_construction")], 429),
    rule("desert", &[("rawWmCategory", "desert")], 429),
    rule("boxing", &[("rawWmCategory", "boxing")], 428),
    rule("water slide", &[("rawWmCategory", "water_slide")], 428),
    rule("interior design", &[("rawWmCategory", "interior_design")], 428),
    rule("caravan club certified location", &[("rawWmCategory", "caravan_club_certified_location")], 426),
    rule("disaster management", &[("rawWmCategory", "disaster_management")], 426),
    rule("emergency management", &[("rawWmCategory", "emergency_management")], 426),
    rule("Federal style architecture", &[("building:architecture", "federal_style")], 426),
    rule("archaeology museum", &[("rawWmCategory", "archaeology_museum")], 425),
    rule("Petron Corporation", &[("rawWmCategory", "Petron_Corporation")], 422),
    rule("driver and vehicle licensing office", &[("rawWmCategory", "driver_and_vehicle_licensing_office")], 421),
    rule("drivers license service", &[("rawWmCategory", "drivers_license_service")], 421),
    rule("Middle Eastern cuisine", &[("rawWmCategory", "Middle_Eastern_cuisine")], 421),
    rule("surf", &[("rawWmCategory", "surf")], 421),
    rule("plumbing", &[("rawWmCategory", "plumbing")], 421),
    rule("15th century construction", &[("historic:period", "15th_century_construction")], 420),
    rule("decor", &[("rawWmCategory", "decor")], 420),
    rule("Quick_(restaurant)", &[("rawWmCategory", "Quick_(restaurant)")], 419),
    rule("madeireira", &[("rawWmCategory", "madeireira")], 419),
    rule("RAF - Royal Air Force", &[("rawWmCategory", "RAF_-_Royal_Air_Force")], 419),
    rule("graffiti", &[("rawWmCategory", "graffiti")], 419),
    rule("fish processing facility/factory", &[("rawWmCategory", "fish_processing_facility/factory")], 418),
    rule("seafood processing facility/factory", &[("rawWmCategory", "seafood_processing_facility/factory")], 418),
    rule("1993_construction", &[("historic:period", "1993_construction")], 418),
    rule("free of charge", &[("rawWmCategory", "free_of_charge")], 417),
    rule("calvinist", &[("rawWmCategory", "calvinist")], 417),
    rule("gymnastic hall", &[("rawWmCategory", "gymnastic_hall")], 416),
    rule("gymnastic center", &[("rawWmCategory", "gymnastic_center")], 416),
    rule("gymnastic centre", &[("rawWmCategory", "gymnastic_centre")], 416),
    rule("estates", &[("rawWmCategory", "estates")], 416),
    rule("gymnastics", &[("rawWmCategory", "gymnastics")], 416),
    rule("ventilation", &[("rawWmCategory", "ventilation")], 415),
    rule("smoking area", &[("rawWmCategory", "smoking_area")], 414),
    rule("telescope", &[("rawWmCategory", "telescope")], 414),
    rule("FSB of Russia", &[("rawWmCategory", "FSB_of_Russia")], 413),
    rule("junior college", &[("rawWmCategory", "junior_college")], 412),
    rule("information technology company  / industry - IT", &[("rawWmCategory", "information_technology_company__/_industry_-_IT")], 412),
    rule("soft drink bottling plant", &[("rawWmCategory", "soft_drink_bottling_plant")], 411),
    rule("meditation", &[("rawWmCategory", "meditation")], 411),
    rule("soft drink production", &[("rawWmCategory", "soft_drink_production")], 411),
    rule("cakery", &[("rawWmCategory", "cakery")], 410),
    rule("cake shop", &[("rawWmCategory", "cake_shop")], 410),
    rule("Korean cuisine", &[("rawWmCategory", "Korean_cuisine")], 408),
    rule("humanitarian", &[("rawWmCategory", "humanitarian")], 408),
    rule("promenade", &[("rawWmCategory", "promenade")], 407),
    rule("monolith", &[("man_made", "monolith")], 406),
    rule("landscape", &[("rawWmCategory", "landscape")], 405),
    rule("2002_construction", &[("historic:period", "2002_construction")], 405),
    rule("packaging company", &[("rawWmCategory", "packaging_company")], 404),
    rule("building contractor", &[("rawWmCategory", "building_contractor")], 404),
    rule("sound stage", &[("rawWmCategory", "sound_stage")], 404),
    rule("1990_construction", &[("historic:period", "1990_construction")], 404),
    rule("1999_construction", &[("historic:period", "1999_construction")], 403),
    rule("1991_construction", &[("historic:period", "1991_construction")], 403),
    rule("Mannerist architecture", &[("building:architecture", "mannerist")], 402),
    rule("flood protection", &[("rawWmCategory", "flood_protection")], 402),
    rule("Renaissance architecture", &[("building:architecture", "renaissance")], 402),
    rule("ambassador's residence", &[("rawWmCategory", "ambassadors_residence")], 400),
    rule("Waffle House", &[("rawWmCategory", "Waffle_House")], 400),
    rule("flag", &[("rawWmCategory", "flag")], 400),
    rule("dome", &[("rawWmCategory", "dome")], 400),
    rule("murder site", &[("rawWmCategory", "murder_site")], 399),
    rule("speedway rack track", &[("rawWmCategory", "speedway_rack_track")], 399),
    rule("pharmaceutical industry / company", &[("rawWmCategory", "pharmaceutical_industry_/_company")], 398),
    rule("glen", &[("rawWmCategory", "glen")], 398),
    rule("circus", &[("rawWmCategory", "circus")], 398),
    rule("ferris wheel", &[("rawWmCategory", "ferris_wheel")], 397),
    rule("fish and chips shop", &[("rawWmCategory", "fish_and_chips_shop")], 397),
    rule("TACAN - tactical air navigation system", &[("navigationaid", "tacan")], 397),
    rule("orthopaedic device / brace supplier", &[("rawWmCategory", "orthopaedic_device_/_brace_supplier")], 396),
    rule("Native American reservation/reserve", &[("rawWmCategory", "Native_American_reservation/reserve")], 396),
    rule("orthopedic device / brace supplier", &[("rawWmCategory", "orthopedic_device_/_brace_supplier")], 396),
    rule("seeds", &[("rawWmCategory", "seeds")], 396),
    rule("Industrial Training Institute / ITI (India)", &[("rawWmCategory", "Industrial_Training_Institute_/_ITI_(India)")], 396),
    rule("fuel industry", &[("rawWmCategory", "fuel_industry")], 395),
    rule("1992_construction", &[("historic:period", "1992_construction")], 395),
    rule("1998_construction", &[("historic:period", "1998_construction")], 395),
    rule("private hospital", &[("rawWmCategory", "private_hospital")], 394),
    rule("historical marker", &[("rawWmCategory", "historical_marker")], 394),
    rule("car painting", &[("rawWmCategory", "car_painting")], 394),
    rule("street food / drink vendor", &[("rawWmCategory", "street_food_/_drink_vendor")], 393),
    rule("mobile food / drink cart", &[("rawWmCategory", "mobile_food_/_drink_cart")], 393),
    rule("usareur", &[("rawWmCategory", "usareur")], 393),
    rule("nikemissile", &[("rawWmCategory", "nikemissile")], 393),
    rule("United States Army in Europe", &[("rawWmCategory", "United_States_Army_in_Europe")], 393),
    rule("towing service", &[("rawWmCategory", "towing_service")], 392),
    rule("microbrewery", &[("rawWmCategory", "microbrewery")], 391),
    rule("Kmart", &[("rawWmCategory", "Kmart")], 391),
    rule("department of motor vehicles (DMV)", &[("rawWmCategory", "department_of_motor_vehicles_(DMV)")], 390),
    rule("business process outsourcing (BPO)", &[("rawWmCategory", "business_process_outsourcing_(BPO)")], 389),
    rule("juvenile detention center (JDC)", &[("rawWmCategory", "juvenile_detention_center_(JDC)")], 389),
    rule("youth detention center", &[("rawWmCategory", "youth_detention_center")], 389),
    rule("2003_construction", &[("historic:period", "2003_construction")], 389),
    rule("lumber yard", &[("rawWmCategory", "lumber_yard")], 388),
    rule("timber yard", &[("rawWmCategory", "timber_yard")], 388),
    rule("timber merchant", &[("rawWmCategory", "timber_merchant")], 388),
    rule("translator", &[("rawWmCategory", "translator")], 387),
    rule("translation company", &[("rawWmCategory", "translation_company")], 387),
    rule("commemorative place/plaque", &[("rawWmCategory", "commemorative_place/plaque")], 386),
    rule("animal breeding", &[("rawWmCategory", "animal_breeding")], 384),
    rule("government degree college", &[("rawWmCategory", "government_degree_college")], 384),
    rule("badminton", &[("rawWmCategory", "badminton")], 383),
    rule("academy - English school (UK)", &[("rawWmCategory", "academy_-_English_school_(UK)")], 383),
    rule("State Bank of India (SBI)", &[("rawWmCategory", "State_Bank_of_India_(SBI)")], 382),
    rule("glazier", &[("rawWmCategory", "glazier")], 382),
    rule("2001_construction", &[("historic:period", "2001_construction")], 381),
    rule("2000_construction", &[("historic:period", "2000_construction")], 381),
    rule("gewerbe", &[("rawWmCategory", "gewerbe")], 381),
    rule("flooring", &[("rawWmCategory", "flooring")], 380),
    rule("hockey field", &[("rawWmCategory", "hockey_field")], 380),
    rule("harvard", &[("rawWmCategory", "harvard")], 380),
    rule("regulatory authority", &[("rawWmCategory", "regulatory_authority")], 379),
    rule("regulator", &[("rawWmCategory", "regulator")], 379),
    rule("regulatory agency", &[("rawWmCategory", "regulatory_agency")], 379),
    rule("bishopric", &[("rawWmCategory", "bishopric")], 379),
    rule("eparchy", &[("rawWmCategory", "eparchy")], 379),
    rule("diocese", &[("rawWmCategory", "diocese")], 379),
    rule("bishop", &[("rawWmCategory", "bishop")], 379),
    rule("american football field", &[("rawWmCategory", "american_football_field")], 378),
    rule("target (military)", &[("rawWmCategory", "target_(military)")], 378),
    rule("1951_construction", &[("historic:period", "1951_construction")], 378),
    rule("dishware", &[("rawWmCategory", "dishware")], 377),
    rule("flagpole", &[("rawWmCategory", "flagpole")], 377),
    rule("wagon", &[("rawWmCategory", "wagon")], 376),
    rule("depression (geology)", &[("rawWmCategory", "depression_(geology)")], 376),
    rule("electrical substation building", &[("rawWmCategory", "electrical_substation_building")], 375),
    rule("logging", &[("rawWmCategory", "logging")], 374),
    rule("conservatory (music)", &[("rawWmCategory", "conservatory_(music)")], 374),
    rule("coast", &[("rawWmCategory", "coast")], 373),
    rule("mangal karyalay", &[("rawWmCategory", "mangal_karyalay")], 373),
    rule("tractors (dealer / manufacturing)", &[("rawWmCategory", "tractors_(dealer_/_manufacturing)")], 373),
    rule("kalyana mandapam", &[("rawWmCategory", "kalyana_mandapam")], 373),
    rule("small borough", &[("rawWmCategory", "small_borough")], 373),
    rule("stone working", &[("rawWmCategory", "stone_working")], 372),
    rule("cannery", &[("rawWmCategory", "cannery")], 372),
    rule("college of agriculture", &[("rawWmCategory", "college_of_agriculture")], 371),
    rule("auctioneer", &[("rawWmCategory", "auctioneer")], 371),
    rule("sewing and needlework goods shop", &[("rawWmCategory", "sewing_and_needlework_goods_shop")], 371),
    rule("department of agriculture", &[("rawWmCategory", "department_of_agriculture")], 371),
    rule("buoy", &[("rawWmCategory", "buoy")], 371),
    rule("granite", &[("rawWmCategory", "granite")], 371),
    rule("auction house", &[("rawWmCategory", "auction_house")], 371),
    rule("shrubland", &[("rawWmCategory", "shrubland")], 370),
    rule("heathland", &[("rawWmCategory", "heathland")], 370),
    rule("scrubland", &[("rawWmCategory", "scrubland")], 370),
    rule("moorland", &[("rawWmCategory", "moorland")], 370),
    rule("uad / wad / wadi", &[("rawWmCategory", "uad_/_wad_/_wadi")], 370),
    rule("object of cultural heritage of federal importance (Russia)", &[("rawWmCategory", "object_of_cultural_heritage_of_federal_importance_(Russia)")], 370),
    rule("Montessori education", &[("rawWmCategory", "Montessori_education")], 370),
    rule("heath", &[("rawWmCategory", "heath")], 370),
    rule("roller skating rink", &[("rawWmCategory", "roller_skating_rink")], 369),
    rule("college / department of computer science", &[("rawWmCategory", "college_/_department_of_computer_science")], 369),
    rule("inline skating ring", &[("rawWmCategory", "inline_skating_ring")], 369),
    rule("Chick-fil-A (restaurant)", &[("rawWmCategory", "Chick-fil-A_(restaurant)")], 369),
    rule("1950_construction", &[("historic:period", "1950_construction")], 369),
    rule("IHOP", &[("rawWmCategory", "IHOP")], 369),
    rule("sluice", &[("rawWmCategory", "sluice")], 369),
    rule("tram depot", &[("rawWmCategory", "tram_depot")], 368),
    rule("dolmen", &[("rawWmCategory", "dolmen")], 368),
    rule("shashlik-house", &[("rawWmCategory", "shashlik-house")], 367),
    rule("beauty supply", &[("rawWmCategory", "beauty_supply")], 366),
    rule("base camp (mountaineering)", &[("rawWmCategory", "base_camp_(mountaineering)")], 365),
    rule("revealed object of cultural heritage (Russia)", &[("rawWmCategory", "revealed_object_of_cultural_heritage_(Russia)")], 365),
    rule("basecamp", &[("rawWmCategory", "basecamp")], 365),
    rule("pharmacy school", &[("rawWmCategory", "pharmacy_school")], 364),
    rule("outcrop (rocks)", &[("rawWmCategory", "outcrop_(rocks)")], 364),
    rule("college / department of pharmacy", &[("rawWmCategory", "college_/_department_of_pharmacy")], 364),
    rule("1996_construction", &[("rawWmCategory", "1996_construction")], 363),
    rule("Ukrainian Orthodox Church – Kyiv Patriarchate (UOC-KP)", &[("rawWmCategory", "Ukrainian_Orthodox_Church_–_Kyiv_Patriarchate_(UOC-KP)")], 362),
    rule("indoor", &[("rawWmCategory", "indoor")], 362),
    rule("Red Cross / Red Crescent", &[("rawWmCategory", "Red_Cross_/_Red_Crescent")], 361),
    rule("American cuisine", &[("rawWmCategory", "American_cuisine")], 361),
    rule("FedEx", &[("rawWmCategory", "FedEx")], 361),
    rule("juice bar / shop", &[("rawWmCategory", "juice_bar_/_shop")], 361),
    rule("1997_construction", &[("rawWmCategory", "1997_construction")], 360),
    rule("Auto Zone", &[("rawWmCategory", "Auto_Zone")], 360),
    rule("AutoZone", &[("rawWmCategory", "AutoZone")], 360),
    rule("gun", &[("rawWmCategory", "gun")], 360),
    rule("aldeia indigena", &[("rawWmCategory", "aldeia_indigena")], 359),
    rule("modernism", &[("rawWmCategory", "modernism")], 359),
    rule("border outpost", &[("rawWmCategory", "border_outpost")], 358),
    rule("canal junction", &[("rawWmCategory", "canal_junction")], 358),
    rule("Publix (supermarket)", &[("rawWmCategory", "Publix_(supermarket)")], 358),
    rule("barge", &[("rawWmCategory", "barge")], 357),
    rule("statistics", &[("rawWmCategory", "statistics")], 356),
    rule("1995_construction", &[("historic:period", "1995_construction")], 355),
    rule("1994 construction", &[("historic:period", "1994_construction")], 355),
    rule("convention", &[("rawWmCategory", "convention")], 355),
    rule("decathlon", &[("rawWmCategory", "decathlon")], 354),
    rule("tile works", &[("rawWmCategory", "tile_works")], 353),
    rule("tile factory", &[("rawWmCategory", "tile_factory")], 353),
    rule("canoe", &[("rawWmCategory", "canoe")], 352),
    rule("polder", &[("rawWmCategory", "polder")], 352),
    rule("weapons", &[("rawWmCategory", "weapons")], 352),
    rule("cellphone accessories store / shop", &[("rawWmCategory", "cellphone_accessories_store_/_shop")], 351),
    rule("ophthalmic hospital", &[("rawWmCategory", "ophthalmic_hospital")], 351),
    rule("mobile phone accessories store / shop", &[("rawWmCategory", "mobile_phone_accessories_store_/_shop")], 351),
    rule("exporter", &[("rawWmCategory", "exporter")], 351),
    rule("eye hospital", &[("rawWmCategory", "eye_hospital")], 351),
    rule("diplomatic / foreign mission / representation", &[("rawWmCategory", "diplomatic_/_foreign_mission_/_representation")], 351),
    rule("cardiac hospital / cardiology clinic", &[("rawWmCategory", "cardiac_hospital_/_cardiology_clinic")], 350),
    rule("breeding kennel", &[("rawWmCategory", "breeding_kennel")], 350),
    rule("water refilling station", &[("rawWmCategory", "water_refilling_station")], 350),
    rule("autobody", &[("rawWmCategory", "autobody")], 349),
    rule("cadet", &[("rawWmCategory", "cadet")], 349),
    rule("bsnl", &[("rawWmCategory", "bsnl")], 348),
    rule("corner", &[("rawWmCategory", "corner")], 348),
    rule("municipal engineering", &[("rawWmCategory", "municipal_engineering")], 346),
    rule("artwork", &[("rawWmCategory", "artwork")], 346),
    rule("drydock", &[("rawWmCategory", "drydock")], 345),
    rule("cattle burial ground", &[("rawWmCategory", "cattle_burial_ground")], 345),
    rule("dry dock", &[("rawWmCategory", "dry_dock")], 345),
    rule("kund (pond)", &[("rawWmCategory", "kund_(pond)")], 344),
    rule("temple tank / pond", &[("rawWmCategory", "temple_tank_/_pond")], 344),
    rule("horse riding centre", &[("rawWmCategory", "horse_riding_centre")], 344),
    rule("merry-go-round (ride)", &[("rawWmCategory", "merry-go-round_(ride)")], 344),
    rule("Applebee&#039;s", &[("rawWmCategory", "Applebee&#039;s")], 344),
    rule("horse riding academy / horse riding school", &[("rawWmCategory", "horse_riding_academy_/_horse_riding_school")], 344),
    rule("carousel", &[("rawWmCategory", "carousel")], 344),
    rule("anganwadi", &[("rawWmCategory", "anganwadi")], 344),
    rule("shows", &[("rawWmCategory", "shows")], 343),
    rule("road traffic channelization", &[("rawWmCategory", "road_traffic_channelization")], 343),
    rule("contabilidade", &[("rawWmCategory", "contabilidade")], 343),
    rule("United States Army", &[("rawWmCategory", "United_States_Army")], 343),
    rule("railway roundhouse", &[("rawWmCategory", "railway_roundhouse")], 343),
    rule("tea estate", &[("rawWmCategory", "tea_estate")], 342),
    rule("maritime museum", &[("rawWmCategory", "maritime_museum")], 342),
    rule("naval museum", &[("rawWmCategory", "naval_museum")], 342),
    rule("bike station", &[("rawWmCategory", "bike_station")], 342),
    rule("tea plantation", &[("rawWmCategory", "tea_plantation")], 342),
    rule("paddling pool", &[("rawWmCategory", "paddling_pool")], 341),
    rule("wading pool", &[("rawWmCategory", "wading_pool")], 341),
    rule("dhaba", &[("rawWmCategory", "dhaba")], 340),
    rule("teacher training college", &[("rawWmCategory", "teacher_training_college")], 339),
    rule("auto parts supplier / manufacturer", &[("rawWmCategory", "auto_parts_supplier_/_manufacturer")], 339),
    rule("Jollibee", &[("rawWmCategory", "Jollibee")], 339),
    rule("sunday school", &[("rawWmCategory", "sunday_school")], 339),
    rule("blood transfusion center", &[("rawWmCategory", "blood_transfusion_center")], 338),
    rule("Domino's Pizza", &[("rawWmCategory", "Dominos_Pizza")], 338),
    rule("opera house", &[("rawWmCategory", "opera_house")], 337),
    rule("opera", &[("rawWmCategory", "opera")], 337),
    rule("operette", &[("rawWmCategory", "operette")], 337),
    rule("sex shop", &[("rawWmCategory", "sex_shop")], 336),
    rule("vihara / boudh vihar", &[("rawWmCategory", "vihara_/_boudh_vihar")], 336),
    rule("software park", &[("rawWmCategory", "software_park")], 336),
    rule("adult shop / store", &[("rawWmCategory", "adult_shop_/_store")], 336),
    rule("erotic shop", &[("rawWmCategory", "erotic_shop")], 336),
    rule("technopark", &[("rawWmCategory", "technopark")], 336),
    rule("science park", &[("rawWmCategory", "science_park")], 336),
    rule("buddhist monastery", &[("rawWmCategory", "buddhist_monastery")], 336),
    rule("destroyer (ship)", &[("rawWmCategory", "destroyer_(ship)")], 334),
    rule("survey", &[("rawWmCategory", "survey")], 334),
    rule("localizer antenna", &[("rawWmCategory", "localizer_antenna")], 334),
    rule("cheese processing plant", &[("rawWmCategory", "cheese_processing_plant")], 333),
    rule("fishing port", &[("rawWmCategory", "fishing_port")], 333),
    rule("oncology", &[("rawWmCategory", "oncology")], 333),
    rule("pancakes", &[("rawWmCategory", "pancakes")], 333),
    rule("American Legion", &[("rawWmCategory", "American_Legion")], 332),
    rule("railway museum", &[("rawWmCategory", "railway_museum")], 331),
    rule("infant clothing store", &[("rawWmCategory", "infant_clothing_store")], 331),
    rule("railroad museum", &[("rawWmCategory", "railroad_museum")], 331),
    rule("Irish pub", &[("rawWmCategory", "Irish_pub")], 331),
    rule("prefecture", &[("rawWmCategory", "prefecture")], 331),
    rule("winding hole", &[("rawWmCategory", "winding_hole")], 330),
    rule("ham radio", &[("rawWmCategory", "ham_radio")], 330),
    rule("espiritismo", &[("rawWmCategory", "espiritismo")], 330),
    rule("canal basin", &[("rawWmCategory", "canal_basin")], 330),
    rule("Victorian style architecture", &[("building:architecture", "victorian_style")], 330),
    rule("jeans store", &[("rawWmCategory", "jeans_store")], 329),
    rule("certification authority", &[("rawWmCategory", "certification_authority")], 329),
    rule("Ethiopian Orthodox Tewahedo Church", &[("rawWmCategory", "Ethiopian_Orthodox_Tewahedo_Church")], 329),
    rule("Tesco", &[("rawWmCategory", "Tesco")], 329),
    rule("inland port", &[("rawWmCategory", "inland_port")], 328),
    rule("Greek cuisine", &[("rawWmCategory", "Greek_cuisine")], 328),
    rule("hatchery", &[("rawWmCategory", "hatchery")], 328),
    rule("thevara paadal petra sthalam", &[("rawWmCategory", "thevara_paadal_petra_sthalam")], 327),
    rule("thaevaara sthalam", &[("rawWmCategory", "thaevaara_sthalam")], 327),
    rule("ayurvedic medicine", &[("rawWmCategory", "ayurvedic_medicine")], 327),
    rule("Denny&#039;s", &[("rawWmCategory", "Denny&#039;s")], 327),
    rule("airsoft", &[("rawWmCategory", "airsoft")], 327),
    rule("ravine", &[("rawWmCategory", "ravine")], 327),
    rule("Rite Aid", &[("rawWmCategory", "Rite_Aid")], 327),
    rule("clay", &[("rawWmCategory", "clay")], 325),
    rule("slug", &[("rawWmCategory", "slug")], 325),
    rule("radiation", &[("rawWmCategory", "radiation")], 325),
    rule("visitor centre", &[("rawWmCategory", "visitor_centre")], 324),
    rule("riverport", &[("rawWmCategory", "riverport")], 324),
    rule("visitor center", &[("rawWmCategory", "visitor_center")], 324),
    rule("lightning protection mast", &[("rawWmCategory", "lightning_protection_mast")], 323),
    rule("headframe", &[("rawWmCategory", "headframe")], 322),
    rule("historic house", &[("rawWmCategory", "historic_house")], 322),
    rule("designated area for campfire / bonfire", &[("rawWmCategory", "designated_area_for_campfire_/_bonfire")], 322),
    rule("bmx track", &[("rawWmCategory", "bmx_track")], 321),
    rule("petting farm", &[("rawWmCategory", "petting_farm")], 321),
    rule("bicycle motocross track", &[("rawWmCategory", "bicycle_motocross_track")], 321),
    rule("AABB", &[("rawWmCategory", "AABB")], 321),
    rule("children's farm", &[("rawWmCategory", "childrens_farm")], 321),
    rule("petting zoo", &[("rawWmCategory", "petting_zoo")], 321),
    rule("children's zoo", &[("rawWmCategory", "childrens_zoo")], 321),
    rule("woods (forest)", &[("rawWmCategory", "woods_(forest)")], 320),
    rule("webhosting", &[("rawWmCategory", "webhosting")], 320),
    rule("Volkswagen car dealer", &[("rawWmCategory", "Volkswagen_car_dealer")], 319),
    rule("adit", &[("rawWmCategory", "adit")], 318),
    rule("osiedle", &[("rawWmCategory", "osiedle")], 318),
    rule("shamshan ghat / burning ghat", &[("rawWmCategory", "shamshan_ghat_/_burning_ghat")], 316),
    rule("Hardee&#039;s", &[("rawWmCategory", "Hardee&#039;s")], 316),
    rule("samsan bhumi / ghat", &[("rawWmCategory", "samsan_bhumi_/_ghat")], 316),
    rule("tile stockists store", &[("rawWmCategory", "tile_stockists_store")], 315),
    rule("UPS (United Parcel Service)", &[("rawWmCategory", "UPS_(United_Parcel_Service)")], 315),
    rule("HSBC", &[("rawWmCategory", "HSBC")], 314),
    rule("townland", &[("rawWmCategory", "townland")], 314),
    rule("marble quarry", &[("rawWmCategory", "marble_quarry")], 314),
    rule("water bottling plant", &[("rawWmCategory", "water_bottling_plant")], 313),
    rule("bottled water", &[("rawWmCategory", "bottled_water")], 313),
    rule("2015_construction", &[("historic:period", "2015_construction")], 313),
    rule("Auchan", &[("rawWmCategory", "Auchan")], 313),
    rule("gasometer / gas holder", &[("rawWmCategory", "gasometer_/_gas_holder")], 313),
    rule("salt pan / flat", &[("rawWmCategory", "salt_pan_/_flat")], 313),
    rule("intelligence", &[("rawWmCategory", "intelligence")], 312),
    rule("mangrove", &[("rawWmCategory", "mangrove")], 311),
    rule("court bailiff", &[("rawWmCategory", "court_bailiff")], 310),
    rule("honours board (USSR)", &[("rawWmCategory", "honours_board_(USSR)")], 310),
    rule("dermatovenerologic dispensary", &[("rawWmCategory", "dermatovenerologic_dispensary")], 309),
    rule("kayak", &[("rawWmCategory", "kayak")], 309),
    rule("anchorage", &[("rawWmCategory", "anchorage")], 309),
    rule("changing room", &[("rawWmCategory", "changing_room")], 308),
    rule("carabinieri", &[("rawWmCategory", "carabinieri")], 308),
    rule("Church's Chicken", &[("rawWmCategory", "Churchs_Chicken")], 307),
    rule("zone d'essai nucléaire", &[("rawWmCategory", "zone_dessai_nucléaire")], 307),
    rule("ski jumping hill", &[("rawWmCategory", "ski_jumping_hill")], 307),
    rule("nuclear testing area", &[("rawWmCategory", "nuclear_testing_area")], 307),
    rule("bandstand", &[("rawWmCategory", "bandstand")], 307),
    rule("body shop", &[("rawWmCategory", "body_shop")], 306),
    rule("editorial office", &[("rawWmCategory", "editorial_office")], 306),
    rule("politics", &[("rawWmCategory", "politics")], 306),
    rule("camperstop", &[("rawWmCategory", "camperstop")], 306),
    rule("byzantine", &[("rawWmCategory", "byzantine")], 305),
    rule("IKEA", &[("rawWmCategory", "IKEA")], 304),
    rule("Colonial Revival architecture", &[("building:architecture", "colonial_revival")], 304),
    rule("Kiabi", &[("rawWmCategory", "Kiabi")], 304),
    rule("Veterans of Foreign Wars", &[("rawWmCategory", "Veterans_of_Foreign_Wars")], 303),
    rule("overlook", &[("rawWmCategory", "overlook")], 303),
    rule("oaks", &[("rawWmCategory", "oaks")], 303),
    rule("sears", &[("rawWmCategory", "sears")], 303),
    rule("Army Air Field US", &[("rawWmCategory", "Army_Air_Field_US")], 302),
    rule("hilltop", &[("rawWmCategory", "hilltop")], 302),
    rule("surveillance", &[("rawWmCategory", "surveillance")], 302),
    rule("vacation rental", &[("rawWmCategory", "vacation_rental")], 300),
    rule("healthcare product shop / industry", &[("rawWmCategory", "healthcare_product_shop_/_industry")], 300),
    rule("1860s construction", &[("historic:period", "1860s_construction")], 299),
    rule("sundial", &[("rawWmCategory", "sundial")], 299),
    rule("homœopathy", &[("rawWmCategory", "homœopathy")], 298),
    rule("Ram temple", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 298),
    rule("Ram mandir", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 298),
    rule("roundabout / junction island", &[("rawWmCategory", "roundabout_/_junction_island")], 298),
    rule("bed-linen", &[("rawWmCategory", "bed-linen")], 298),
    rule("brewpub", &[("rawWmCategory", "brewpub")], 298),
    rule("Ramalayam", &[("rawWmCategory", "Ramalayam")], 298),
    rule("homeopathy", &[("rawWmCategory", "homeopathy")], 298),
    rule("homoeopathy", &[("rawWmCategory", "homoeopathy")], 298),
    rule("federal government", &[("rawWmCategory", "federal_government")], 296),
    rule("scaled models (vehicles)", &[("rawWmCategory", "scaled_models_(vehicles)")], 296),
    rule("karate", &[("rawWmCategory", "karate")], 296),
    rule("Safeway (supermarket)", &[("rawWmCategory", "Safeway_(supermarket)")], 296),
    rule("hosting", &[("rawWmCategory", "hosting")], 295),
    rule("chess", &[("sport", "chess")], 294),
    rule("excavation", &[("rawWmCategory", "excavation")], 294),
    rule("celtic", &[("rawWmCategory", "celtic")], 293),
    rule("The Salvation Army", &[("rawWmCategory", "The_Salvation_Army")], 293),
    rule("impound lot", &[("rawWmCategory", "impound_lot")], 292),
    rule("car pound", &[("rawWmCategory", "car_pound")], 292),
    rule("1912_construction", &[("historic:period", "1912_construction")], 292),
    rule("bagels", &[("rawWmCategory", "bagels")], 292),
    rule("atoll", &[("rawWmCategory", "atoll")], 291),
    rule("ryokan", &[("rawWmCategory", "ryokan")], 291),
    rule("hospice", &[("rawWmCategory", "hospice")], 291),
    rule("explosives", &[("rawWmCategory", "explosives")], 291),
    rule("gas flare", &[("rawWmCategory", "gas_flare")], 290),
    rule("1917_construction", &[("historic:period", "1917_construction")], 290),
    rule("flare stack", &[("rawWmCategory", "flare_stack")], 290),
    rule("comic book store", &[("store", "comic_book")], 290),
    rule("assisted living", &[("rawWmCategory", "assisted_living")], 290),
    rule("religious items", &[("rawWmCategory", "religious_items")], 289),
    rule("kitchenware", &[("rawWmCategory", "kitchenware")], 289),
    rule("pet grooming", &[("rawWmCategory", "pet_grooming")], 289),
    rule("mountain monogram", &[("rawWmCategory", "mountain_monogram")], 289),
    rule("kitchen accessories", &[("rawWmCategory", "kitchen_accessories")], 289),
    rule("oasis", &[("rawWmCategory", "oasis")], 289),
    rule("elderlycare", &[("rawWmCategory", "elderlycare")], 289),
    rule("hillside letter", &[("rawWmCategory", "hillside_letter")], 289),
    rule("minerals", &[("rawWmCategory", "minerals")], 289),
    rule("children's centre", &[("rawWmCategory", "childrens_centre")], 288),
    rule("landing field", &[("rawWmCategory", "landing_field")], 288),
    rule("Raiffeisen Bank", &[("rawWmCategory", "Raiffeisen_Bank")], 288),
    rule("physics", &[("rawWmCategory", "physics")], 288),
    rule("brothel", &[("rawWmCategory", "brothel")], 288),
    rule("1938_construction", &[("historic:period", "1938_construction")], 287),
    rule("Zara", &[("rawWmCategory", "Zara")], 287),
    rule("trekking", &[("rawWmCategory", "trekking")], 286),
    rule("citadel", &[("rawWmCategory", "citadel")], 286),
    rule("Holocaust", &[("rawWmCategory", "Holocaust")], 286),
    rule("bricolage", &[("rawWmCategory", "bricolage")], 286),
    rule("Napoleonic Wars 1803–1815", &[("rawWmCategory", "Napoleonic_Wars_1803–1815")], 286),
    rule("freguesia (Portugal)", &[("rawWmCategory", "freguesia_(Portugal)")], 286),
    rule("halal", &[("rawWmCategory", "halal")], 286),
    rule("aircraft crash site", &[("rawWmCategory", "aircraft_crash_site")], 285),
    rule("oil pumping station", &[("rawWmCategory", "oil_pumping_station")], 285),
    rule("spa town", &[("rawWmCategory", "spa_town")], 285),
    rule("picture framing shop", &[("rawWmCategory", "picture_framing_shop")], 284),
    rule("picture frame maker", &[("rawWmCategory", "picture_frame_maker")], 284),
    rule("minaret", &[("rawWmCategory", "minaret")], 283),
    rule("minara", &[("rawWmCategory", "minara")], 283),
    rule("Kohl&#039;s", &[("rawWmCategory", "Kohl&#039;s")], 283),
    rule("rock climbing", &[("sport", "climbing")], 283),
    rule("Pushkin", &[("rawWmCategory", "Pushkin")], 283),
    rule("ruko", &[("rawWmCategory", "ruko")], 282),
    rule("tubewell", &[("rawWmCategory", "tubewell")], 282),
    rule("menhir", &[("rawWmCategory", "menhir")], 281),
    rule("biology", &[("rawWmCategory", "biology")], 281),
    rule("biological", &[("rawWmCategory", "biological")], 281),
    rule("[grill/meat restaurant]", &[("rawWmCategory", "[grill/meat_restaurant]")], 280),
    rule("panchayat [Dont use - to be replaced]", &[("rawWmCategory", "panchayat_[Dont_use_-_to_be_replaced]")], 280),
    rule("barbecue restaurant", &[("amenity", "restaurant"), ("cuisine", "barbecue")], 280),
    rule("barbeque / BBQ restaurant", &[("amenity", "restaurant"), ("cuisine", "barbecue")], 280),
    rule("Georgian style architecture", &[("building:architecture", "georgian_style")], 280),
    rule("psychology", &[("rawWmCategory", "psychology")], 280),
    rule("biotechnology", &[("rawWmCategory", "biotechnology")], 280),
    rule("ejido", &[("rawWmCategory", "ejido")], 280),
    rule("weather radar", &[("rawWmCategory", "weather_radar")], 279),
    rule("naval base", &[("rawWmCategory", "naval_base")], 279),
    rule("renovation", &[("rawWmCategory", "renovation")], 279),
    rule("Coptic Church", &[("rawWmCategory", "Coptic_Church")], 279),
    rule("shankar - to be replaced / deleted", &[("rawWmCategory", "shankar_-_to_be_replaced_/_deleted")], 278),
    rule("frontier post", &[("rawWmCategory", "frontier_post")], 278),
    rule("satellite tracking / ground station", &[("rawWmCategory", "satellite_tracking_/_ground_station")], 277),
    rule("mutt (Hinduism / Jainism)", &[("rawWmCategory", "mutt_(Hinduism_/_Jainism)")], 277),
    rule("Transilien", &[("rawWmCategory", "Transilien")], 277),
    rule("private garden", &[("rawWmCategory", "private_garden")], 277),
    rule("math (Hinduism / Jainism)", &[("rawWmCategory", "math_(Hinduism_/_Jainism)")], 277),
    rule("timber", &[("rawWmCategory", "timber")], 277),
    rule("matha", &[("rawWmCategory", "matha")], 277),
    rule("French cuisine", &[("rawWmCategory", "French_cuisine")], 276),
    rule("armoury", &[("rawWmCategory", "armoury")], 276),
    rule("armory", &[("rawWmCategory", "armory")], 276),
    rule("bleachers", &[("rawWmCategory", "bleachers")], 276),
    rule("drive-in theater", &[("rawWmCategory", "drive-in_theater")], 275),
    rule("fjord", &[("natural", "fjord")], 275),
    rule("Caltex", &[("rawWmCategory", "Caltex")], 275),
    rule("RC airplane / helicopter field", &[("rawWmCategory", "RC_airplane_/_helicopter_field")], 274),
    rule("14th century construction", &[("historic:period", "14th_century_construction")], 274),
    rule("Blockbuster store (movie rental)", &[("rawWmCategory", "Blockbuster_store_(movie_rental)")], 274),
    rule("model aircraft flying field", &[("rawWmCategory", "model_aircraft_flying_field")], 274),
    rule("jeepney terminal", &[("rawWmCategory", "jeepney_terminal")], 273),
    rule("bingo hall", &[("rawWmCategory", "bingo_hall")], 272),
    rule("rocket on display", &[("rawWmCategory", "rocket_on_display")], 272),
    rule("missile on display", &[("rawWmCategory", "missile_on_display")], 272),
    rule("self catering accommodation", &[("rawWmCategory", "self_catering_accommodation")], 272),
    rule("RER", &[("rawWmCategory", "RER")], 272),
    rule("curry restaurant", &[("rawWmCategory", "curry_restaurant")], 272),
    rule("prayer ground / prayer hall", &[("rawWmCategory", "prayer_ground_/_prayer_hall")], 272),
    rule("meteor crater", &[("rawWmCategory", "meteor_crater")], 271),
    rule("mountain range", &[("rawWmCategory", "mountain_range")], 271),
    rule("siva - to be replaced / deleted", &[("rawWmCategory", "siva_-_to_be_replaced_/_deleted")], 271),
    rule("trolleybus garage", &[("rawWmCategory", "trolleybus_garage")], 271),
    rule("trolleybus depot", &[("rawWmCategory", "trolleybus_depot")], 271),
    rule("impact crater", &[("rawWmCategory", "impact_crater")], 271),
    rule("office of the governor", &[("rawWmCategory", "office_of_the_governor")], 271),
    rule("astrobleme", &[("rawWmCategory", "astrobleme")], 271),
    rule("Murugan temple", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 270),
    rule("Kartikeya temple", &[("amenity", "place_of_worship"), ("religion", "hindu"), ("building", "temple")], 270),
    rule("rodeo grounds/arena", &[("rawWmCategory", "rodeo_grounds/arena")], 270),
    rule("natural gas storage", &[("rawWmCategory", "natural_gas_storage")], 270),
    rule("kibbutz", &[("rawWmCategory", "kibbutz")], 270),
    rule("agricultural research farm", &[("rawWmCategory", "agricultural_research_farm")], 270),
    rule("heritage railway", &[("rawWmCategory", "heritage_railway")], 269),
    rule("cables", &[("rawWmCategory", "cables")], 269),
    rule("National Trust property (UK)", &[("rawWmCategory", "National_Trust_property_(UK)")], 268),
    rule("Appalachian trail", &[("rawWmCategory", "Appalachian_trail")], 268),
    rule("Metra", &[("rawWmCategory", "Metra")], 268),
    rule("boatyard", &[("rawWmCategory", "boatyard")], 268),
    rule("psychoneurologic dispensary", &[("rawWmCategory", "psychoneurologic_dispensary")], 267),
    rule("conservation", &[("rawWmCategory", "conservation")], 267),
    rule("UR-100K", &[("rawWmCategory", "UR-100K")], 267),
    rule("notable by news", &[("rawWmCategory", "notable_by_news")], 266),
    rule("imambargah", &[("rawWmCategory", "imambargah")], 266),
    rule("imambara", &[("rawWmCategory", "imambara")], 266),
    rule("holiday accommodation", &[("rawWmCategory", "holiday_accommodation")], 265),
    rule("nuclear waste storage", &[("rawWmCategory", "nuclear_waste_storage")], 265),
    rule("trade fair", &[("rawWmCategory", "trade_fair")], 265),
    rule("stone circle", &[("rawWmCategory", "stone_circle")], 264),
    rule("1910_construction", &[("historic:period", "1910_construction")], 264),
    rule("Accor Hotels", &[("rawWmCategory", "Accor_Hotels")], 263),
    rule("VORTAC", &[("navigationaid", "vortac")], 263),
    rule("fireworks store", &[("rawWmCategory", "fireworks_store")], 263),
    rule("cenotaph", &[("rawWmCategory", "cenotaph")], 263),
    rule("Southeastern Pennsylvania Transportation Authority (SEPTA)", &[("rawWmCategory", "Southeastern_Pennsylvania_Transportation_Authority_(SEPTA)")], 263),
    rule("orthopaedics - orthopaedic surgery", &[("rawWmCategory", "orthopaedics_-_orthopaedic_surgery")], 262),
    rule("orthopedic hospital", &[("rawWmCategory", "orthopedic_hospital")], 262),
    rule("Tenaga Nasional Berhad", &[("rawWmCategory", "Tenaga_Nasional_Berhad")], 262),
    rule("search and rescue / SAR", &[("rawWmCategory", "search_and_rescue_/_SAR")], 262),
    rule("Chicago Transit Authority (CTA)", &[("rawWmCategory", "Chicago_Transit_Authority_(CTA)")], 262),
];

/// Rules withdrawn from the active table. Kept so exports can report them.
#[rustfmt::skip]
pub(super) static RETIRED: &[CategoryRule] = &[
    rule("do not draw title", &[("rawWmCategory", "do_not_draw_title")], 221_314),
    rule("draw only border", &[("rawWmCategory", "draw_only_border")], 116_226),
    rule("society", &[("rawWmCategory", "society")], 6988),
];
