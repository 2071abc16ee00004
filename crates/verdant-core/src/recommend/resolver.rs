//! Priority resolution over the recommendation layers.
//!
//! Plants: exact location → hardiness over climate → hardiness over default.
//! Elements: climate → default. Each chain is a fixed list of lookup sources
//! tried in order; the last source of each chain is total.

use std::collections::HashSet;

use super::{
    ElementOrigin, ElementTable, PlantCategory, PlantOrigin, PlantSelection, Recommendations,
    RecommendationStore,
};
use crate::location::{ClimateClass, HardinessClass, LocationProfile};

/// Concatenate `first` and `second`, dropping repeats, keeping first-seen order.
pub fn merge_unique(first: &[String], second: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(first.len() + second.len());
    first
        .iter()
        .chain(second)
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

/// Inputs to a plant lookup.
struct PlantQuery<'q> {
    code: &'q str,
    climate: ClimateClass,
    hardiness: Option<&'q HardinessClass>,
}

/// A single plant lookup source.
#[derive(Debug, Clone, Copy)]
enum PlantLookup {
    ExactLocation,
    HardinessOverClimate,
}

/// Plant sources in priority order; `merge_over_default` backs them.
const PLANT_CHAIN: [PlantLookup; 2] = [PlantLookup::ExactLocation, PlantLookup::HardinessOverClimate];

/// A single element lookup source.
#[derive(Debug, Clone, Copy)]
enum ElementLookup {
    Climate,
}

const ELEMENT_CHAIN: [ElementLookup; 1] = [ElementLookup::Climate];

impl PlantLookup {
    fn attempt(
        self,
        store: &RecommendationStore,
        query: &PlantQuery<'_>,
    ) -> Option<(PlantSelection, PlantOrigin)> {
        match self {
            PlantLookup::ExactLocation => store.location_plants(query.code).map(|plants| {
                let origin = PlantOrigin::Location { code: query.code.to_string() };
                (plants.clone(), origin)
            }),
            PlantLookup::HardinessOverClimate => {
                let base = store.climate_plants(query.climate)?;
                Some(layered(store, query.hardiness, base, Some(query.climate)))
            }
        }
    }
}

impl ElementLookup {
    fn attempt(self, store: &RecommendationStore, climate: ClimateClass) -> Option<(ElementTable, ElementOrigin)> {
        match self {
            ElementLookup::Climate => store
                .climate_elements(climate)
                .map(|table| (table.clone(), ElementOrigin::Climate(climate))),
        }
    }
}

/// Merge the hardiness entry (if any) over `base`, category by category.
fn layered(
    store: &RecommendationStore,
    hardiness: Option<&HardinessClass>,
    base: &PlantSelection,
    climate: Option<ClimateClass>,
) -> (PlantSelection, PlantOrigin) {
    let over = hardiness.and_then(|h| store.hardiness_plants(h));
    let plants = PlantCategory::ALL
        .iter()
        .map(|cat| {
            let first = over.and_then(|o| o.get(cat)).map(Vec::as_slice).unwrap_or(&[]);
            let second = base.get(cat).map(Vec::as_slice).unwrap_or(&[]);
            (*cat, merge_unique(first, second))
        })
        .collect();
    let origin = PlantOrigin::Layered {
        hardiness: over.and(hardiness.copied()),
        climate,
    };
    (plants, origin)
}

/// Resolves plant and element recommendations against a store.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationResolver<'s> {
    store: &'s RecommendationStore,
}

impl RecommendationResolver<'static> {
    /// Resolver over the bundled tables.
    pub fn builtin() -> Self {
        Self::new(RecommendationStore::builtin())
    }
}

impl Default for RecommendationResolver<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'s> RecommendationResolver<'s> {
    pub fn new(store: &'s RecommendationStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'s RecommendationStore {
        self.store
    }

    /// Plant selection for a location.
    ///
    /// An exact location entry wins outright. Otherwise the hardiness entry
    /// (when `hardiness` is given and bundled) is listed first and the climate
    /// entry, or the default entry for unmapped climates, is appended.
    pub fn resolve_plants(
        &self,
        code: &str,
        climate: ClimateClass,
        hardiness: Option<&HardinessClass>,
    ) -> (PlantSelection, PlantOrigin) {
        let query = PlantQuery { code, climate, hardiness };
        let (plants, origin) = PLANT_CHAIN
            .iter()
            .find_map(|source| source.attempt(self.store, &query))
            .unwrap_or_else(|| layered(self.store, hardiness, &self.store.default_plants, None));
        tracing::debug!(code, ?origin, "resolved plants");
        (plants, origin)
    }

    /// Element guidance for a climate, falling back to the default table.
    pub fn resolve_elements(&self, climate: ClimateClass) -> (ElementTable, ElementOrigin) {
        let (table, origin) = ELEMENT_CHAIN
            .iter()
            .find_map(|source| source.attempt(self.store, climate))
            .unwrap_or_else(|| (self.store.default_elements.clone(), ElementOrigin::Default));
        tracing::debug!(%climate, ?origin, "resolved elements");
        (table, origin)
    }

    /// Full recommendations for a classified location.
    ///
    /// Unresolved profiles contribute no hardiness layer, so they fall through
    /// to the default tables.
    pub fn resolve(&self, profile: &LocationProfile) -> Recommendations {
        let hardiness = profile.resolved.then_some(&profile.hardiness);
        let (plants, plant_origin) = self.resolve_plants(&profile.code, profile.climate, hardiness);
        let (elements, element_origin) = self.resolve_elements(profile.climate);
        Recommendations { plants, elements, plant_origin, element_origin }
    }

    /// Resolve many location codes; runs on the rayon pool with `threading`.
    pub fn resolve_many(&self, codes: &[String]) -> Vec<(LocationProfile, Recommendations)> {
        let one = |code: &String| {
            let profile = crate::location::resolve_location(code);
            let recs = self.resolve(&profile);
            (profile, recs)
        };

        #[cfg(feature = "threading")]
        {
            use rayon::prelude::*;
            codes.par_iter().map(one).collect()
        }
        #[cfg(not(feature = "threading"))]
        {
            codes.iter().map(one).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::resolve_location;
    use crate::recommend::ElementKind;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn merge_unique_keeps_first_occurrence_order() {
        let a = names(&["Fig", "Citrus", "Fig"]);
        let b = names(&["Citrus", "Olive", "Fig", "Peach"]);
        assert_eq!(merge_unique(&a, &b), names(&["Fig", "Citrus", "Olive", "Peach"]));
        assert!(merge_unique(&[], &[]).is_empty());
    }

    #[test]
    fn exact_location_entry_is_returned_verbatim() {
        let resolver = RecommendationResolver::builtin();
        let store = resolver.store();
        let h = "4a".parse::<HardinessClass>().unwrap();
        let (plants, origin) = resolver.resolve_plants("10001", ClimateClass::Continental, Some(&h));
        assert_eq!(&plants, store.location_plants("10001").unwrap());
        assert_eq!(origin, PlantOrigin::Location { code: "10001".into() });
        assert_eq!(plants[&PlantCategory::Trees][0], "Red Maple");
    }

    #[test]
    fn hardiness_plants_precede_climate_plants() {
        let resolver = RecommendationResolver::builtin();
        let h = "8b".parse::<HardinessClass>().unwrap();
        let (plants, origin) = resolver.resolve_plants("33333", ClimateClass::Subtropical, Some(&h));
        assert_eq!(
            origin,
            PlantOrigin::Layered { hardiness: Some(h), climate: Some(ClimateClass::Subtropical) }
        );

        // 8b edibles: Fig, Persimmon, Citrus, Blueberry, Muscadine Grape.
        // Subtropical edibles: Citrus, Strawberry, Blueberry, Tomato, Pepper.
        let edibles = &plants[&PlantCategory::Edibles];
        assert_eq!(
            edibles,
            &names(&["Fig", "Persimmon", "Citrus", "Blueberry", "Muscadine Grape", "Strawberry", "Tomato", "Pepper"])
        );

        // 8b has no annuals; climate list passes through untouched.
        let store = resolver.store();
        assert_eq!(
            plants[&PlantCategory::Annuals],
            store.climate_plants(ClimateClass::Subtropical).unwrap()[&PlantCategory::Annuals]
        );
    }

    #[test]
    fn merged_lists_never_contain_duplicates() {
        let resolver = RecommendationResolver::builtin();
        for code in ["02134", "14850", "33101", "55401", "60601", "87000", "99999", "x", ""] {
            let recs = resolver.resolve(&resolve_location(code));
            for (cat, list) in &recs.plants {
                let unique: HashSet<&String> = list.iter().collect();
                assert_eq!(unique.len(), list.len(), "code {code:?} {cat} has duplicates: {list:?}");
            }
        }
    }

    #[test]
    fn unmapped_climate_merges_over_default() {
        let resolver = RecommendationResolver::builtin();
        let h = "3a".parse::<HardinessClass>().unwrap();
        let (plants, origin) = resolver.resolve_plants("abcde", ClimateClass::Unknown, Some(&h));
        assert_eq!(origin, PlantOrigin::Layered { hardiness: Some(h), climate: None });
        assert_eq!(plants[&PlantCategory::Trees][0], "Paper Birch");
        assert!(plants[&PlantCategory::Trees].contains(&"Flowering Dogwood".to_string()));
    }

    #[test]
    fn hardiness_without_entry_is_not_reported() {
        let resolver = RecommendationResolver::builtin();
        let h = "5a".parse::<HardinessClass>().unwrap();
        let (plants, origin) = resolver.resolve_plants("14850", ClimateClass::Continental, Some(&h));
        assert_eq!(origin, PlantOrigin::Layered { hardiness: None, climate: Some(ClimateClass::Continental) });
        assert_eq!(
            &plants,
            resolver.store().climate_plants(ClimateClass::Continental).unwrap()
        );
    }

    #[test]
    fn every_climate_resolves_all_five_elements() {
        let resolver = RecommendationResolver::builtin();
        for climate in ClimateClass::ALL {
            let (table, origin) = resolver.resolve_elements(climate);
            for kind in ElementKind::ALL {
                assert!(table.contains_key(&kind), "{climate} lacks {kind}");
            }
            if climate == ClimateClass::Unknown {
                assert_eq!(origin, ElementOrigin::Default);
            } else {
                assert_eq!(origin, ElementOrigin::Climate(climate));
            }
        }
    }

    #[test]
    fn empty_code_yields_default_tables() {
        let resolver = RecommendationResolver::builtin();
        let store = resolver.store();
        let recs = resolver.resolve(&resolve_location(""));
        assert_eq!(recs.plants, store.default_plants);
        assert_eq!(recs.elements, store.default_elements);
        assert_eq!(recs.plant_origin, PlantOrigin::Layered { hardiness: None, climate: None });
        assert_eq!(recs.plants.len(), 6);
        assert_eq!(recs.elements.len(), 5);
    }

    #[test]
    fn resolution_is_idempotent() {
        let resolver = RecommendationResolver::builtin();
        let a = resolver.resolve(&resolve_location("55401"));
        let b = resolver.resolve(&resolve_location("55401"));
        assert_eq!(a, b);
    }

    #[test]
    fn resolve_many_preserves_input_order() {
        let resolver = RecommendationResolver::builtin();
        let codes: Vec<String> = ["98101", "", "78701"].iter().map(|s| s.to_string()).collect();
        let out = resolver.resolve_many(&codes);
        let got: Vec<&str> = out.iter().map(|(p, _)| p.code.as_str()).collect();
        assert_eq!(got, ["98101", "", "78701"]);
        assert!(matches!(out[0].1.plant_origin, PlantOrigin::Location { .. }));
    }
}
