//! Layered recommendation tables.
//!
//! Four layers feed the resolver: exact location entries, hardiness-class
//! entries, climate-class entries and a default layer. The default layer must
//! cover every plant category and every element, which `validate` enforces for
//! tables loaded from JSON.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::{ElementKind, ElementProfile, ElementTable, PlantCategory, PlantSelection};
use crate::error::StoreError;
use crate::location::{ClimateClass, HardinessClass, Subzone};

/// Read-only recommendation tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationStore {
    /// Exact location-code entries; these bypass merging entirely.
    #[serde(default)]
    pub locations: BTreeMap<String, PlantSelection>,
    /// Hardiness entries may omit categories.
    #[serde(default)]
    pub hardiness: BTreeMap<HardinessClass, PlantSelection>,
    #[serde(default)]
    pub climates: BTreeMap<ClimateClass, PlantSelection>,
    pub default_plants: PlantSelection,
    #[serde(default)]
    pub elements: BTreeMap<ClimateClass, ElementTable>,
    pub default_elements: ElementTable,
}

static BUILTIN: OnceLock<RecommendationStore> = OnceLock::new();

impl RecommendationStore {
    /// The bundled tables, built once and shared by every resolver.
    pub fn builtin() -> &'static RecommendationStore {
        BUILTIN.get_or_init(|| RecommendationStore {
            locations: LOCATION_PLANTS
                .iter()
                .map(|&(code, plants)| (code.to_string(), selection(plants)))
                .collect(),
            hardiness: HARDINESS_PLANTS
                .iter()
                .map(|&(h, plants)| (h, selection(plants)))
                .collect(),
            climates: CLIMATE_PLANTS
                .iter()
                .map(|&(c, plants)| (c, selection(plants)))
                .collect(),
            default_plants: selection(DEFAULT_PLANTS),
            elements: CLIMATE_ELEMENTS
                .iter()
                .map(|&(c, table)| (c, element_table(table)))
                .collect(),
            default_elements: element_table(DEFAULT_ELEMENTS),
        })
    }

    /// Parse tables from JSON and check default coverage.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let store: Self = serde_json::from_str(json)?;
        store.validate()?;
        Ok(store)
    }

    /// The default layer must answer for every category and element.
    pub fn validate(&self) -> Result<(), StoreError> {
        if let Some(&missing) = PlantCategory::ALL
            .iter()
            .find(|c| !self.default_plants.contains_key(c))
        {
            return Err(StoreError::MissingDefaultCategory(missing));
        }
        if let Some(&missing) = ElementKind::ALL
            .iter()
            .find(|e| !self.default_elements.contains_key(e))
        {
            return Err(StoreError::MissingDefaultElement(missing));
        }
        Ok(())
    }

    pub fn location_plants(&self, code: &str) -> Option<&PlantSelection> {
        self.locations.get(code)
    }

    pub fn hardiness_plants(&self, hardiness: &HardinessClass) -> Option<&PlantSelection> {
        self.hardiness.get(hardiness)
    }

    pub fn climate_plants(&self, climate: ClimateClass) -> Option<&PlantSelection> {
        self.climates.get(&climate)
    }

    pub fn climate_elements(&self, climate: ClimateClass) -> Option<&ElementTable> {
        self.elements.get(&climate)
    }
}

// ── Bundled data ──────────────────────────────────────────────────────────────

type StaticPlants = &'static [(PlantCategory, &'static [&'static str])];

struct StaticElement {
    description: &'static str,
    placement: &'static str,
    plants: &'static [&'static str],
    features: &'static [&'static str],
}

type StaticElements = &'static [(ElementKind, StaticElement)];

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn selection(plants: StaticPlants) -> PlantSelection {
    plants.iter().map(|&(cat, names)| (cat, owned(names))).collect()
}

fn element_table(table: StaticElements) -> ElementTable {
    table
        .iter()
        .map(|(kind, e)| {
            let profile = ElementProfile {
                description: e.description.to_string(),
                placement: e.placement.to_string(),
                plants: owned(e.plants),
                features: owned(e.features),
            };
            (*kind, profile)
        })
        .collect()
}

const CLIMATE_PLANTS: &[(ClimateClass, StaticPlants)] = &[
    (
        ClimateClass::Tropical,
        &[
            (PlantCategory::Trees, &["Coconut Palm", "Banana", "Mango", "Jackfruit", "Breadfruit"]),
            (PlantCategory::Shrubs, &["Hibiscus", "Bougainvillea", "Bird of Paradise", "Heliconia", "Plumeria"]),
            (PlantCategory::Perennials, &["Anthurium", "Bromeliad", "Orchid", "Ginger", "Canna Lily"]),
            (PlantCategory::Annuals, &["Coleus", "Impatiens", "Caladium", "Begonia", "Marigold"]),
            (PlantCategory::Groundcovers, &[
                "Mondo Grass",
                "Beach Sunflower",
                "Perennial Peanut",
                "Blue Daze",
                "Asian Jasmine",
            ]),
            (PlantCategory::Edibles, &["Papaya", "Pineapple", "Passion Fruit", "Avocado", "Turmeric"]),
        ],
    ),
    (
        ClimateClass::Subtropical,
        &[
            (PlantCategory::Trees, &["Citrus", "Olive", "Fig", "Peach", "Loquat"]),
            (PlantCategory::Shrubs, &["Gardenia", "Camellia", "Azalea", "Oleander", "Lantana"]),
            (PlantCategory::Perennials, &["Agapanthus", "Coreopsis", "Daylily", "Salvia", "Verbena"]),
            (PlantCategory::Annuals, &["Zinnia", "Cosmos", "Sunflower", "Nasturtium", "Sweet Alyssum"]),
            (PlantCategory::Groundcovers, &["Creeping Thyme", "Lantana", "Asiatic Jasmine", "Liriope", "Creeping Jenny"]),
            (PlantCategory::Edibles, &["Citrus", "Strawberry", "Blueberry", "Tomato", "Pepper"]),
        ],
    ),
    (
        ClimateClass::Temperate,
        &[
            (PlantCategory::Trees, &["Maple", "Oak", "Cherry", "Apple", "Dogwood"]),
            (PlantCategory::Shrubs, &["Hydrangea", "Rhododendron", "Viburnum", "Lilac", "Forsythia"]),
            (PlantCategory::Perennials, &["Hosta", "Astilbe", "Echinacea", "Black-eyed Susan", "Sedum"]),
            (PlantCategory::Annuals, &["Petunia", "Pansy", "Snapdragon", "Marigold", "Sweet Pea"]),
            (PlantCategory::Groundcovers, &["Creeping Phlox", "Vinca", "Pachysandra", "Sweet Woodruff", "Ajuga"]),
            (PlantCategory::Edibles, &["Apple", "Pear", "Raspberry", "Blackberry", "Kale"]),
        ],
    ),
    (
        ClimateClass::Continental,
        &[
            (PlantCategory::Trees, &["Birch", "Spruce", "Pine", "Larch", "Aspen"]),
            (PlantCategory::Shrubs, &["Juniper", "Potentilla", "Ninebark", "Serviceberry", "Red-twig Dogwood"]),
            (PlantCategory::Perennials, &["Yarrow", "Russian Sage", "Catmint", "Daylily", "Coneflower"]),
            (PlantCategory::Annuals, &["Geranium", "Alyssum", "Calendula", "Nasturtium", "Viola"]),
            (PlantCategory::Groundcovers, &["Sedum", "Creeping Juniper", "Arctic Willow", "Bearberry", "Kinnikinnick"]),
            (PlantCategory::Edibles, &["Rhubarb", "Currant", "Gooseberry", "Haskap", "Hardy Kiwi"]),
        ],
    ),
    (
        ClimateClass::Arid,
        &[
            (PlantCategory::Trees, &["Mesquite", "Palo Verde", "Desert Willow", "Joshua Tree", "Acacia"]),
            (PlantCategory::Shrubs, &["Sage", "Ocotillo", "Creosote Bush", "Brittlebush", "Jojoba"]),
            (PlantCategory::Perennials, &["Agave", "Yucca", "Aloe", "Penstemon", "Desert Marigold"]),
            (PlantCategory::Annuals, &[
                "Desert Lupine",
                "California Poppy",
                "Desert Sunflower",
                "Globe Mallow",
                "Desert Bluebells",
            ]),
            (PlantCategory::Groundcovers, &[
                "Ice Plant",
                "Trailing Lantana",
                "Blackfoot Daisy",
                "Desert Zinnia",
                "Trailing Indigo Bush",
            ]),
            (PlantCategory::Edibles, &["Prickly Pear", "Pomegranate", "Date Palm", "Fig", "Jujube"]),
        ],
    ),
];

const DEFAULT_PLANTS: StaticPlants = &[
    (PlantCategory::Trees, &["Oak", "Maple", "Pine", "Fruit Trees", "Flowering Dogwood"]),
    (PlantCategory::Shrubs, &["Hydrangea", "Lilac", "Boxwood", "Azalea", "Rhododendron"]),
    (PlantCategory::Perennials, &["Lavender", "Echinacea", "Black-eyed Susan", "Daylily", "Hosta"]),
    (PlantCategory::Annuals, &["Marigold", "Zinnia", "Petunia", "Sunflower", "Cosmos"]),
    (PlantCategory::Groundcovers, &["Creeping Thyme", "Sedum", "Vinca", "Pachysandra", "Ajuga"]),
    (PlantCategory::Edibles, &["Tomato", "Pepper", "Lettuce", "Herbs", "Berries"]),
];

const LOCATION_PLANTS: &[(&str, StaticPlants)] = &[
    (
        "10001",
        &[
            (PlantCategory::Trees, &["Red Maple", "American Sweetgum", "Pin Oak", "American Hornbeam", "Serviceberry"]),
            (PlantCategory::Shrubs, &[
                "Winterberry Holly",
                "Arrowwood Viburnum",
                "New Jersey Tea",
                "Summersweet",
                "Bayberry",
            ]),
            (PlantCategory::Perennials, &[
                "New England Aster",
                "Butterfly Weed",
                "Joe Pye Weed",
                "Cardinal Flower",
                "Blue Flag Iris",
            ]),
            (PlantCategory::Annuals, &[
                "Sunflower",
                "Partridge Pea",
                "Plains Coreopsis",
                "Spotted Beebalm",
                "Annual Phlox",
            ]),
            (PlantCategory::Groundcovers, &[
                "Wild Ginger",
                "Foamflower",
                "Wild Strawberry",
                "Pennsylvania Sedge",
                "Creeping Phlox",
            ]),
            (PlantCategory::Edibles, &[
                "Highbush Blueberry",
                "Pawpaw",
                "American Persimmon",
                "Serviceberry",
                "Wild Strawberry",
            ]),
        ],
    ),
    (
        "78701",
        &[
            (PlantCategory::Trees, &[
                "Texas Live Oak",
                "Texas Mountain Laurel",
                "Mexican Plum",
                "Desert Willow",
                "Texas Redbud",
            ]),
            (PlantCategory::Shrubs, &["Agarita", "Cenizo", "Flame Acanthus", "Texas Sage", "Yaupon Holly"]),
            (PlantCategory::Perennials, &[
                "Blackfoot Daisy",
                "Mealy Blue Sage",
                "Greggs Mistflower",
                "Rock Penstemon",
                "Autumn Sage",
            ]),
            (PlantCategory::Annuals, &[
                "Bluebonnet",
                "Indian Blanket",
                "Pink Evening Primrose",
                "Drummond Phlox",
                "Texas Paintbrush",
            ]),
            (PlantCategory::Groundcovers, &["Frogfruit", "Horseherb", "Silver Ponyfoot", "Snake Herb", "Woolly Stemodia"]),
            (PlantCategory::Edibles, &["Agarita Berry", "Texas Persimmon", "Mustang Grape", "Dewberry", "Prickly Pear"]),
        ],
    ),
    (
        "90210",
        &[
            (PlantCategory::Trees, &["Coast Live Oak", "Western Sycamore", "California Pepper", "Olive", "Jacaranda"]),
            (PlantCategory::Shrubs, &["Toyon", "Lemonade Berry", "Coffeeberry", "White Sage", "Cleveland Sage"]),
            (PlantCategory::Perennials, &[
                "Matilija Poppy",
                "Island Snapdragon",
                "Chalk Dudleya",
                "Channel Island Tree Poppy",
                "Catalina Silverlace",
            ]),
            (PlantCategory::Annuals, &["Tidy Tips", "Globe Gilia", "California Poppy", "Desert Bluebells", "Goldfields"]),
            (PlantCategory::Groundcovers, &["Creeping Sage", "Coyote Mint", "Deer Grass", "Canyon Prince Wild Rye", "Carex"]),
            (PlantCategory::Edibles, &["Prickly Pear", "Lemonade Berry", "Manzanita Berries", "Chia", "California Bay"]),
        ],
    ),
    (
        "95460",
        &[
            (PlantCategory::Trees, &[
                "Coast Redwood",
                "Douglas Fir",
                "California Bay Laurel",
                "Madrone",
                "Bishop Pine",
            ]),
            (PlantCategory::Shrubs, &["Ceanothus", "Manzanita", "Salal", "California Lilac", "Western Azalea"]),
            (PlantCategory::Perennials, &[
                "California Fuchsia",
                "Seaside Daisy",
                "Yarrow",
                "Douglas Iris",
                "Coast Buckwheat",
            ]),
            (PlantCategory::Annuals, &["California Poppy", "Baby Blue Eyes", "Clarkia", "Lupine", "Farewell-to-Spring"]),
            (PlantCategory::Groundcovers, &[
                "Kinnikinnick",
                "Beach Strawberry",
                "Yerba Buena",
                "Wild Ginger",
                "Redwood Sorrel",
            ]),
            (PlantCategory::Edibles, &["Huckleberry", "Thimbleberry", "Elderberry", "Miners Lettuce", "Bay Nuts"]),
        ],
    ),
    (
        "98101",
        &[
            (PlantCategory::Trees, &[
                "Western Red Cedar",
                "Sitka Spruce",
                "Vine Maple",
                "Pacific Dogwood",
                "Shore Pine",
            ]),
            (PlantCategory::Shrubs, &[
                "Salal",
                "Oregon Grape",
                "Red Flowering Currant",
                "Evergreen Huckleberry",
                "Snowberry",
            ]),
            (PlantCategory::Perennials, &[
                "Sword Fern",
                "Deer Fern",
                "Inside-Out Flower",
                "Columbine",
                "Western Bleeding Heart",
            ]),
            (PlantCategory::Annuals, &[
                "Farewell-to-Spring",
                "Sea Blush",
                "Miners Lettuce",
                "Spring Gold",
                "Blue-eyed Mary",
            ]),
            (PlantCategory::Groundcovers, &[
                "Kinnikinnick",
                "Wild Ginger",
                "False Lily of the Valley",
                "Bunchberry",
                "Twinflower",
            ]),
            (PlantCategory::Edibles, &[
                "Salmonberry",
                "Thimbleberry",
                "Trailing Blackberry",
                "Huckleberry",
                "Oregon Grape",
            ]),
        ],
    ),
];

const HARDINESS_PLANTS: &[(HardinessClass, StaticPlants)] = &[
    (
        HardinessClass::new(3, Subzone::A),
        &[
            (PlantCategory::Trees, &["Paper Birch", "Siberian Larch", "Amur Maple", "Quaking Aspen", "Jack Pine"]),
            (PlantCategory::Shrubs, &[
                "Nanking Cherry",
                "Common Lilac",
                "Dwarf Arctic Willow",
                "Siberian Peashrub",
                "Red-osier Dogwood",
            ]),
            (PlantCategory::Perennials, &[
                "Siberian Iris",
                "Iceland Poppy",
                "Hens and Chicks",
                "Sea Thrift",
                "Pasque Flower",
            ]),
            (PlantCategory::Edibles, &["Honeyberry", "Highbush Cranberry", "Rhubarb", "Chives", "Alpine Strawberry"]),
        ],
    ),
    (
        HardinessClass::new(4, Subzone::B),
        &[
            (PlantCategory::Trees, &[
                "Norway Spruce",
                "River Birch",
                "Kentucky Coffeetree",
                "American Linden",
                "Hackberry",
            ]),
            (PlantCategory::Shrubs, &[
                "Arrowwood Viburnum",
                "Annabelle Hydrangea",
                "Ninebark",
                "Forsythia",
                "Dwarf Bush Honeysuckle",
            ]),
            (PlantCategory::Perennials, &["Bleeding Heart", "Columbine", "Peony", "Daylily", "Coral Bells"]),
            (PlantCategory::Edibles, &["Apple", "Plum", "Currant", "Gooseberry", "Asparagus"]),
        ],
    ),
    (
        HardinessClass::new(6, Subzone::A),
        &[
            (PlantCategory::Trees, &["Red Maple", "Eastern Redbud", "Serviceberry", "Sweetgum", "River Birch"]),
            (PlantCategory::Shrubs, &[
                "Oakleaf Hydrangea",
                "Winterberry Holly",
                "Beautyberry",
                "Summersweet",
                "Virginia Sweetspire",
            ]),
            (PlantCategory::Perennials, &["Baptisia", "Coneflower", "Bee Balm", "Liatris", "Autumn Joy Sedum"]),
            (PlantCategory::Edibles, &["Peach", "Cherry", "Blackberry", "Raspberry", "Grapes"]),
        ],
    ),
    (
        HardinessClass::new(8, Subzone::B),
        &[
            (PlantCategory::Trees, &["Crape Myrtle", "Southern Magnolia", "Live Oak", "Bald Cypress", "Windmill Palm"]),
            (PlantCategory::Shrubs, &["Camellia", "Loropetalum", "Abelia", "Gardenia", "Bottlebrush"]),
            (PlantCategory::Perennials, &["Canna", "Agapanthus", "Lantana", "Mexican Petunia", "Firebush"]),
            (PlantCategory::Edibles, &["Fig", "Persimmon", "Citrus", "Blueberry", "Muscadine Grape"]),
        ],
    ),
    (
        HardinessClass::new(10, Subzone::A),
        &[
            (PlantCategory::Trees, &["Royal Poinciana", "Gumbo Limbo", "Coconut Palm", "Mango", "Avocado"]),
            (PlantCategory::Shrubs, &["Hibiscus", "Ixora", "Bougainvillea", "Croton", "Plumeria"]),
            (PlantCategory::Perennials, &["Bird of Paradise", "Heliconia", "Bromeliad", "Pentas", "Caladium"]),
            (PlantCategory::Edibles, &["Banana", "Papaya", "Pineapple", "Passion Fruit", "Starfruit"]),
        ],
    ),
];

const CLIMATE_ELEMENTS: &[(ClimateClass, StaticElements)] = &[
    (
        ClimateClass::Tropical,
        &[
            (
                ElementKind::Water,
                StaticElement {
                    description: "Water elements are naturally abundant in tropical climates",
                    placement: "North and East areas of the garden",
                    plants: &["Taro", "Canna Lily", "Elephant Ear", "Water Lily", "Lotus"],
                    features: &["Small pond", "Water fountain", "Birdbath", "Stream"],
                },
            ),
            (
                ElementKind::Wood,
                StaticElement {
                    description: "Wood elements thrive in the moisture-rich tropical environment",
                    placement: "East and Southeast areas of the garden",
                    plants: &["Bamboo", "Banana", "Palms", "Ficus", "Rubber Tree"],
                    features: &["Wooden benches", "Trellises", "Pergolas"],
                },
            ),
            (
                ElementKind::Fire,
                StaticElement {
                    description: "Fire elements balance the abundant water energy",
                    placement: "South area of the garden",
                    plants: &["Heliconia", "Red Ginger", "Hibiscus", "Anthurium", "Cordyline"],
                    features: &["Outdoor lighting", "Fire pit (if climate permits)", "Red garden art"],
                },
            ),
            (
                ElementKind::Earth,
                StaticElement {
                    description: "Earth elements provide stability and grounding",
                    placement: "Center, Southwest and Northeast areas of the garden",
                    plants: &["Bromeliads", "Crotons", "Ti Plant", "Succulents", "Orchids"],
                    features: &["Stone pathways", "Rock gardens", "Terracotta pots"],
                },
            ),
            (
                ElementKind::Metal,
                StaticElement {
                    description: "Metal elements help control excessive growth",
                    placement: "West and Northwest areas of the garden",
                    plants: &[
                        "Silver Buttonwood",
                        "Dusty Miller",
                        "Silver Thyme",
                        "White Flowering Plants",
                    ],
                    features: &["Wind chimes", "Metal sculptures", "Copper or brass accents"],
                },
            ),
        ],
    ),
    (
        ClimateClass::Subtropical,
        &[
            (
                ElementKind::Water,
                StaticElement {
                    description: "Water elements provide cooling energy",
                    placement: "North and East areas of the garden",
                    plants: &["Iris", "Canna", "Papyrus", "Taro", "Ferns"],
                    features: &["Reflecting pool", "Fountain", "Birdbath"],
                },
            ),
            (
                ElementKind::Wood,
                StaticElement {
                    description: "Wood elements represent growth and vitality",
                    placement: "East and Southeast areas of the garden",
                    plants: &["Citrus Trees", "Bamboo", "Ficus", "Magnolia", "Crape Myrtle"],
                    features: &["Wooden garden structures", "Living walls", "Trellises"],
                },
            ),
            (
                ElementKind::Fire,
                StaticElement {
                    description: "Fire elements add warmth and passion",
                    placement: "South area of the garden",
                    plants: &[
                        "Bougainvillea",
                        "Lantana",
                        "Bird of Paradise",
                        "Red Salvia",
                        "Bottlebrush",
                    ],
                    features: &["Outdoor lighting", "Fire pit", "BBQ area"],
                },
            ),
            (
                ElementKind::Earth,
                StaticElement {
                    description: "Earth elements provide stability",
                    placement: "Center, Southwest and Northeast areas of the garden",
                    plants: &["Agave", "Aloe", "Yucca", "Sedum", "Echeveria"],
                    features: &["Stone pathways", "Gravel gardens", "Terracotta containers"],
                },
            ),
            (
                ElementKind::Metal,
                StaticElement {
                    description: "Metal elements add precision and clarity",
                    placement: "West and Northwest areas of the garden",
                    plants: &["Silver Sage", "Lavender", "White Roses", "Dusty Miller", "Lambs Ear"],
                    features: &["Metal sculptures", "Wind chimes", "Garden arches"],
                },
            ),
        ],
    ),
    (
        ClimateClass::Temperate,
        &[
            (
                ElementKind::Water,
                StaticElement {
                    description: "Water elements bring serenity and flow",
                    placement: "North and East areas of the garden",
                    plants: &["Astilbe", "Hosta", "Japanese Iris", "Ligularia", "Ferns"],
                    features: &["Small pond", "Stream", "Fountain", "Rain garden"],
                },
            ),
            (
                ElementKind::Wood,
                StaticElement {
                    description: "Wood elements represent growth and flexibility",
                    placement: "East and Southeast areas of the garden",
                    plants: &["Maple Trees", "Dogwood", "Redbud", "Hydrangea", "Viburnum"],
                    features: &["Wooden arbors", "Trellises", "Raised beds"],
                },
            ),
            (
                ElementKind::Fire,
                StaticElement {
                    description: "Fire elements add warmth and energy",
                    placement: "South area of the garden",
                    plants: &["Red Roses", "Echinacea", "Monarda", "Red Dahlias", "Crocosmia"],
                    features: &["Fire pit", "Outdoor lighting", "Red garden art"],
                },
            ),
            (
                ElementKind::Earth,
                StaticElement {
                    description: "Earth elements provide stability and nourishment",
                    placement: "Center, Southwest and Northeast areas of the garden",
                    plants: &["Sedum", "Ornamental Grasses", "Heuchera", "Peonies", "Daylilies"],
                    features: &["Stone pathways", "Rock gardens", "Terracotta containers"],
                },
            ),
            (
                ElementKind::Metal,
                StaticElement {
                    description: "Metal elements add precision and clarity",
                    placement: "West and Northwest areas of the garden",
                    plants: &[
                        "White Roses",
                        "Shasta Daisy",
                        "Baby's Breath",
                        "Dusty Miller",
                        "Silver Artemisia",
                    ],
                    features: &["Metal sculptures", "Wind chimes", "Garden arches"],
                },
            ),
        ],
    ),
    (
        ClimateClass::Continental,
        &[
            (
                ElementKind::Water,
                StaticElement {
                    description: "Water elements bring balance to dry continental climates",
                    placement: "North and East areas of the garden",
                    plants: &["Blue Oat Grass", "Russian Sage", "Catmint", "Blue Fescue", "Iris"],
                    features: &["Small pond", "Birdbath", "Dry creek bed"],
                },
            ),
            (
                ElementKind::Wood,
                StaticElement {
                    description: "Wood elements add vitality and growth",
                    placement: "East and Southeast areas of the garden",
                    plants: &["Birch", "Aspen", "Linden", "Serviceberry", "Dogwood"],
                    features: &["Wooden raised beds", "Trellises", "Arbors"],
                },
            ),
            (
                ElementKind::Fire,
                StaticElement {
                    description: "Fire elements add warmth to cold continental climates",
                    placement: "South area of the garden",
                    plants: &[
                        "Red Twig Dogwood",
                        "Autumn Joy Sedum",
                        "Daylily",
                        "Blanket Flower",
                        "Yarrow",
                    ],
                    features: &["Fire pit", "Outdoor heating", "Red garden art"],
                },
            ),
            (
                ElementKind::Earth,
                StaticElement {
                    description: "Earth elements provide stability",
                    placement: "Center, Southwest and Northeast areas of the garden",
                    plants: &[
                        "Ornamental Grasses",
                        "Sedum",
                        "Hens and Chicks",
                        "Catmint",
                        "Lamb's Ear",
                    ],
                    features: &["Stone pathways", "Rock gardens", "Gravel mulch"],
                },
            ),
            (
                ElementKind::Metal,
                StaticElement {
                    description: "Metal elements add structure in harsh climates",
                    placement: "West and Northwest areas of the garden",
                    plants: &[
                        "Silver Mound Artemisia",
                        "Snow-in-Summer",
                        "White Coneflower",
                        "Lambs Ear",
                        "Russian Sage",
                    ],
                    features: &["Metal sculptures", "Wind chimes", "Metal raised beds"],
                },
            ),
        ],
    ),
    (
        ClimateClass::Arid,
        &[
            (
                ElementKind::Water,
                StaticElement {
                    description: "Water elements are precious in arid climates",
                    placement: "North and East areas of the garden",
                    plants: &[
                        "Blue Agave",
                        "Blue Sage",
                        "Desert Willow",
                        "Blue Palo Verde",
                        "Blue Euphorbia",
                    ],
                    features: &["Small pond with cover", "Rainwater harvesting", "Dry creek bed"],
                },
            ),
            (
                ElementKind::Wood,
                StaticElement {
                    description: "Wood elements represent resilience in harsh conditions",
                    placement: "East and Southeast areas of the garden",
                    plants: &["Mesquite", "Palo Verde", "Desert Willow", "Ocotillo", "Creosote Bush"],
                    features: &["Shade structures", "Ramadas", "Wooden benches"],
                },
            ),
            (
                ElementKind::Fire,
                StaticElement {
                    description: "Fire elements are already abundant in hot arid climates",
                    placement: "South area of the garden",
                    plants: &[
                        "Red Yucca",
                        "Firecracker Penstemon",
                        "Bougainvillea",
                        "Red Bird of Paradise",
                        "Ocotillo",
                    ],
                    features: &["Red rock", "Copper accents", "Outdoor lighting"],
                },
            ),
            (
                ElementKind::Earth,
                StaticElement {
                    description: "Earth elements are dominant in desert landscapes",
                    placement: "Center, Southwest and Northeast areas of the garden",
                    plants: &["Agave", "Barrel Cactus", "Golden Barrel", "Aloe", "Euphorbia"],
                    features: &["Desert rock gardens", "Gravel mulch", "Earth-toned pottery"],
                },
            ),
            (
                ElementKind::Metal,
                StaticElement {
                    description: "Metal elements add structure and control",
                    placement: "West and Northwest areas of the garden",
                    plants: &[
                        "White Sage",
                        "Desert Milkweed",
                        "White Evening Primrose",
                        "Brittlebush",
                        "White Gaura",
                    ],
                    features: &["Metal sculptures", "Wind chimes", "Metal shade structures"],
                },
            ),
        ],
    ),
];

const DEFAULT_ELEMENTS: StaticElements = &[
    (
        ElementKind::Water,
        StaticElement {
            description: "Water elements bring serenity and flow",
            placement: "North and East areas of the garden",
            plants: &["Ferns", "Hostas", "Astilbe", "Japanese Iris", "Water Lilies"],
            features: &["Small pond", "Fountain", "Birdbath", "Rain garden"],
        },
    ),
    (
        ElementKind::Wood,
        StaticElement {
            description: "Wood elements represent growth and flexibility",
            placement: "East and Southeast areas of the garden",
            plants: &["Trees", "Shrubs", "Tall Perennials", "Vines", "Bamboo"],
            features: &["Wooden arbors", "Trellises", "Raised beds"],
        },
    ),
    (
        ElementKind::Fire,
        StaticElement {
            description: "Fire elements add warmth and energy",
            placement: "South area of the garden",
            plants: &["Red Flowers", "Spiky Plants", "Plants with Red Berries", "Red Foliage"],
            features: &["Fire pit", "Outdoor lighting", "Red garden art"],
        },
    ),
    (
        ElementKind::Earth,
        StaticElement {
            description: "Earth elements provide stability and nourishment",
            placement: "Center, Southwest and Northeast areas of the garden",
            plants: &[
                "Low-growing Plants",
                "Yellow and Orange Flowers",
                "Square-shaped Plants",
                "Edibles",
            ],
            features: &["Stone pathways", "Rock gardens", "Terracotta containers"],
        },
    ),
    (
        ElementKind::Metal,
        StaticElement {
            description: "Metal elements add precision and clarity",
            placement: "West and Northwest areas of the garden",
            plants: &["White Flowers", "Round-leaf Plants", "Silver or Gray Foliage", "Aromatic Herbs"],
            features: &["Metal sculptures", "Wind chimes", "Garden arches"],
        },
    ),
];
