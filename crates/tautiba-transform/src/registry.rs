//! SKOS concepts for the codes that occur in the fact table.
//!
//! Each code category (area, ethnicity) keeps its own seen-set keyed by the
//! lowercased code: the first occurrence materializes the concept, later
//! occurrences reuse it. Classifier concepts are materialized the same way,
//! keyed by classifier code, the first time a local concept links to them.
//!
//! Unmappable codes are not errors. A code without digits, a missing
//! cross-reference or a classifier miss only means the concept gets its raw
//! code as label and no `skos:exactMatch`.

use std::collections::BTreeMap;

use oxrdf::vocab::rdf;
use oxrdf::{Literal, NamedNode};
use tracing::{trace, warn};

use tautiba_model::vocab::EX;
use tautiba_model::{CubeTerms, ReferenceData, TripleSink};

use crate::error::TransformError;
use crate::identifier::{extract_digits, slugify};
use crate::schema::{en, lv};

/// Concepts materialized so far, per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryCounts {
    pub area_concepts: usize,
    pub ethnicity_concepts: usize,
    pub territorial_classifier_concepts: usize,
    pub ethnic_classifier_concepts: usize,
    pub slug_collisions: usize,
}

/// Seen-set for one local code list.
#[derive(Debug, Default)]
struct CodeList {
    /// lowercased code -> concept IRI
    concepts: BTreeMap<String, NamedNode>,
    /// slug -> lowercased code that first claimed it
    slugs: BTreeMap<String, String>,
    collisions: usize,
}

impl CodeList {
    fn get(&self, key: &str) -> Option<&NamedNode> {
        self.concepts.get(key)
    }

    /// Record a new code; flags a slug already claimed by a different code.
    fn claim(&mut self, key: String, slug: String, iri: NamedNode, category: &str) {
        match self.slugs.get(&slug) {
            Some(owner) if *owner != key => {
                self.collisions += 1;
                warn!(
                    category,
                    code = %key,
                    existing = %owner,
                    slug = %slug,
                    "distinct codes share a concept identifier"
                );
            }
            Some(_) => {}
            None => {
                self.slugs.insert(slug, key.clone());
            }
        }
        self.concepts.insert(key, iri);
    }
}

/// Classifier concepts keyed by classifier code.
#[derive(Debug)]
struct ClassifierConcepts {
    path: &'static str,
    concepts: BTreeMap<i64, NamedNode>,
}

impl ClassifierConcepts {
    fn new(path: &'static str) -> Self {
        Self {
            path,
            concepts: BTreeMap::new(),
        }
    }
}

/// Builds and deduplicates area and ethnicity concepts for one run.
///
/// Reference data is borrowed read-only; all dedup state lives here and is
/// dropped with the registry, so every run starts empty.
#[derive(Debug)]
pub struct ConceptRegistry<'r> {
    terms: &'r CubeTerms,
    reference: &'r ReferenceData,
    areas: CodeList,
    ethnicities: CodeList,
    atvk: ClassifierConcepts,
    taut: ClassifierConcepts,
}

impl<'r> ConceptRegistry<'r> {
    pub fn new(terms: &'r CubeTerms, reference: &'r ReferenceData) -> Self {
        Self {
            terms,
            reference,
            areas: CodeList::default(),
            ethnicities: CodeList::default(),
            atvk: ClassifierConcepts::new("concept/atvk2021"),
            taut: ClassifierConcepts::new("concept/taut2016"),
        }
    }

    pub fn counts(&self) -> RegistryCounts {
        RegistryCounts {
            area_concepts: self.areas.concepts.len(),
            ethnicity_concepts: self.ethnicities.concepts.len(),
            territorial_classifier_concepts: self.atvk.concepts.len(),
            ethnic_classifier_concepts: self.taut.concepts.len(),
            slug_collisions: self.areas.collisions + self.ethnicities.collisions,
        }
    }

    /// Concept for an area code, materializing it on first sight.
    ///
    /// Labels come from the open-data territory table (exact code match),
    /// falling back to the raw code. The ATVK cross-link is decided
    /// independently from the digits of the code; both may apply.
    pub fn area<S: TripleSink>(
        &mut self,
        code: &str,
        sink: &mut S,
    ) -> Result<NamedNode, TransformError> {
        let key = code.to_lowercase();
        if let Some(iri) = self.areas.get(&key) {
            return Ok(iri.clone());
        }

        let slug = slugify(code);
        let iri = EX.iri(&format!("concept/area/{slug}"))?;
        let terms = self.terms;
        self.local_concept(&iri, code, &terms.scheme_area, sink);

        let territory = self
            .reference
            .territories
            .get(code)
            .filter(|names| names.local.is_some() || names.alternate.is_some());
        match territory {
            Some(names) => {
                if let Some(local) = &names.local {
                    sink.statement(&iri, &terms.skos_pref_label, lv(local));
                }
                if let Some(alternate) = &names.alternate {
                    sink.statement(&iri, &terms.skos_pref_label, en(alternate));
                }
            }
            None => {
                sink.statement(
                    &iri,
                    &terms.skos_pref_label,
                    Literal::new_simple_literal(code),
                );
            }
        }

        // all-zero digits are not a classifier code
        let classifier = extract_digits(code)
            .filter(|digits| *digits != 0)
            .and_then(|digits| {
                self.reference
                    .territorial
                    .get(digits)
                    .map(|name| (digits, name.to_string()))
            });
        match classifier {
            Some((digits, name)) => {
                let target = classifier_concept(
                    &mut self.atvk,
                    terms,
                    &terms.scheme_atvk,
                    digits,
                    &name,
                    sink,
                )?;
                sink.statement(&iri, &terms.skos_exact_match, target);
            }
            None => trace!(code, "area code has no territorial classifier entry"),
        }

        self.areas.claim(key, slug, iri.clone(), "area");
        Ok(iri)
    }

    /// Concept for an ethnicity code, materializing it on first sight.
    ///
    /// Linked concepts take the TAUT classifier name as label; anything the
    /// cross-reference or the classifier cannot resolve is labelled with the
    /// raw code.
    pub fn ethnicity<S: TripleSink>(
        &mut self,
        code: &str,
        sink: &mut S,
    ) -> Result<NamedNode, TransformError> {
        let key = code.to_lowercase();
        if let Some(iri) = self.ethnicities.get(&key) {
            return Ok(iri.clone());
        }

        let slug = slugify(code);
        let iri = EX.iri(&format!("concept/ethnicity/{slug}"))?;
        let terms = self.terms;
        self.local_concept(&iri, code, &terms.scheme_ethnicity, sink);

        let classifier = self.reference.ethnicity_xref.get(code).and_then(|taut| {
            self.reference
                .ethnic
                .get(taut)
                .map(|name| (taut, name.to_string()))
        });
        match classifier {
            Some((taut, name)) => {
                sink.statement(&iri, &terms.skos_pref_label, lv(&name));
                let target = classifier_concept(
                    &mut self.taut,
                    terms,
                    &terms.scheme_taut,
                    taut,
                    &name,
                    sink,
                )?;
                sink.statement(&iri, &terms.skos_exact_match, target);
            }
            None => {
                trace!(code, "ethnicity code has no classifier cross-reference");
                sink.statement(
                    &iri,
                    &terms.skos_pref_label,
                    Literal::new_simple_literal(code),
                );
            }
        }

        self.ethnicities.claim(key, slug, iri.clone(), "ethnicity");
        Ok(iri)
    }

    fn local_concept<S: TripleSink>(
        &self,
        iri: &NamedNode,
        code: &str,
        scheme: &NamedNode,
        sink: &mut S,
    ) {
        let terms = self.terms;
        sink.statement(iri, &NamedNode::from(rdf::TYPE), terms.skos_concept.clone());
        sink.statement(iri, &terms.skos_in_scheme, scheme.clone());
        sink.statement(iri, &terms.skos_notation, Literal::new_simple_literal(code));
    }
}

/// Classifier concept for `code`, emitted the first time it is referenced.
fn classifier_concept<S: TripleSink>(
    concepts: &mut ClassifierConcepts,
    terms: &CubeTerms,
    scheme: &NamedNode,
    code: i64,
    name: &str,
    sink: &mut S,
) -> Result<NamedNode, TransformError> {
    if let Some(iri) = concepts.concepts.get(&code) {
        return Ok(iri.clone());
    }
    let iri = EX.iri(&format!("{}/{code}", concepts.path))?;
    sink.statement(&iri, &NamedNode::from(rdf::TYPE), terms.skos_concept.clone());
    sink.statement(&iri, &terms.skos_in_scheme, scheme.clone());
    sink.statement(
        &iri,
        &terms.skos_notation,
        Literal::new_simple_literal(code.to_string()),
    );
    sink.statement(&iri, &terms.skos_pref_label, lv(name));
    concepts.concepts.insert(code, iri.clone());
    Ok(iri)
}

#[cfg(test)]
mod tests {
    use oxrdf::{Subject, Term, Triple};
    use tautiba_model::{ClassifierLookup, CrossReferenceTable, TerritoryNames, TerritoryTable};

    use super::*;

    fn reference() -> ReferenceData {
        let mut territories = TerritoryTable::new();
        territories.insert(
            "LV0001000",
            TerritoryNames {
                local: Some("Rīga".to_string()),
                alternate: Some("Riga".to_string()),
            },
        );
        ReferenceData {
            ethnic: [(17, "Krievi".to_string()), (1, "Latvieši".to_string())]
                .into_iter()
                .collect(),
            territorial: [(1000, "Rīga".to_string())]
                .into_iter()
                .collect::<ClassifierLookup>(),
            territories,
            ethnicity_xref: [("E_RUS", 17), ("E_UKR", 21)]
                .into_iter()
                .collect::<CrossReferenceTable>(),
        }
    }

    fn objects(triples: &[Triple], subject: &NamedNode, predicate: &NamedNode) -> Vec<Term> {
        triples
            .iter()
            .filter(|t| t.subject == Subject::from(subject.clone()) && t.predicate == *predicate)
            .map(|t| t.object.clone())
            .collect()
    }

    #[test]
    fn codes_differing_in_case_share_one_concept() {
        let terms = CubeTerms::new();
        let reference = reference();
        let mut registry = ConceptRegistry::new(&terms, &reference);
        let mut triples: Vec<Triple> = Vec::new();

        let first = registry.ethnicity("E_OTH", &mut triples).expect("concept");
        let emitted = triples.len();
        let second = registry.ethnicity("e_oth", &mut triples).expect("concept");

        assert_eq!(first, second);
        assert_eq!(triples.len(), emitted);
        assert_eq!(registry.counts().ethnicity_concepts, 1);
    }

    #[test]
    fn area_label_prefers_territory_table_and_links_classifier() {
        let terms = CubeTerms::new();
        let reference = reference();
        let mut registry = ConceptRegistry::new(&terms, &reference);
        let mut triples: Vec<Triple> = Vec::new();

        let area = registry.area("LV0001000", &mut triples).expect("concept");

        let labels = objects(&triples, &area, &terms.skos_pref_label);
        assert_eq!(
            labels,
            vec![Term::from(lv("Rīga")), Term::from(en("Riga"))]
        );
        let atvk = EX.iri("concept/atvk2021/1000").expect("iri");
        assert_eq!(
            objects(&triples, &area, &terms.skos_exact_match),
            vec![Term::from(atvk.clone())]
        );
        assert_eq!(
            objects(&triples, &atvk, &terms.skos_notation),
            vec![Term::from(Literal::new_simple_literal("1000"))]
        );
    }

    #[test]
    fn area_without_digits_falls_back_to_raw_label() {
        let terms = CubeTerms::new();
        let reference = reference();
        let mut registry = ConceptRegistry::new(&terms, &reference);
        let mut triples: Vec<Triple> = Vec::new();

        let area = registry.area("LV_TOTAL", &mut triples).expect("concept");

        assert_eq!(
            objects(&triples, &area, &terms.skos_pref_label),
            vec![Term::from(Literal::new_simple_literal("LV_TOTAL"))]
        );
        assert!(objects(&triples, &area, &terms.skos_exact_match).is_empty());
        assert_eq!(registry.counts().territorial_classifier_concepts, 0);
    }

    #[test]
    fn ethnicity_links_only_when_classifier_has_the_code() {
        let terms = CubeTerms::new();
        let reference = reference();
        let mut registry = ConceptRegistry::new(&terms, &reference);
        let mut triples: Vec<Triple> = Vec::new();

        let rus = registry.ethnicity("E_RUS", &mut triples).expect("concept");
        // mapped to 21, which the classifier lacks
        let ukr = registry.ethnicity("E_UKR", &mut triples).expect("concept");

        assert_eq!(
            objects(&triples, &rus, &terms.skos_pref_label),
            vec![Term::from(lv("Krievi"))]
        );
        assert_eq!(
            objects(&triples, &rus, &terms.skos_exact_match),
            vec![Term::from(EX.iri("concept/taut2016/17").expect("iri"))]
        );
        assert_eq!(
            objects(&triples, &ukr, &terms.skos_pref_label),
            vec![Term::from(Literal::new_simple_literal("E_UKR"))]
        );
        assert!(objects(&triples, &ukr, &terms.skos_exact_match).is_empty());
    }

    #[test]
    fn classifier_concepts_are_shared_between_local_codes() {
        let terms = CubeTerms::new();
        let mut reference = reference();
        reference.territorial.insert(1000, "Rīga");
        let mut registry = ConceptRegistry::new(&terms, &reference);
        let mut triples: Vec<Triple> = Vec::new();

        registry.area("LV0001000", &mut triples).expect("concept");
        registry.area("LV-0001000", &mut triples).expect("concept");

        let counts = registry.counts();
        assert_eq!(counts.area_concepts, 2);
        assert_eq!(counts.territorial_classifier_concepts, 1);
        let atvk = EX.iri("concept/atvk2021/1000").expect("iri");
        let typed = triples
            .iter()
            .filter(|t| t.subject == Subject::from(atvk.clone()) && t.predicate.as_ref() == rdf::TYPE)
            .count();
        assert_eq!(typed, 1);
    }

    #[test]
    fn all_zero_digits_never_link() {
        let terms = CubeTerms::new();
        let mut reference = reference();
        reference.territorial.insert(0, "Latvija");
        let mut registry = ConceptRegistry::new(&terms, &reference);
        let mut triples: Vec<Triple> = Vec::new();

        let area = registry.area("LV0000000", &mut triples).expect("concept");

        assert!(objects(&triples, &area, &terms.skos_exact_match).is_empty());
        assert_eq!(registry.counts().territorial_classifier_concepts, 0);
    }

    #[test]
    fn punctuation_only_codes_share_the_bare_scheme_path() {
        let terms = CubeTerms::new();
        let reference = reference();
        let mut registry = ConceptRegistry::new(&terms, &reference);
        let mut triples: Vec<Triple> = Vec::new();

        let dots = registry.area("..", &mut triples).expect("concept");
        assert_eq!(dots, EX.iri("concept/area/").expect("iri"));
        assert_eq!(registry.counts().slug_collisions, 0);

        let dashes = registry.area("--", &mut triples).expect("concept");
        assert_eq!(dots, dashes);
        let counts = registry.counts();
        assert_eq!(counts.area_concepts, 2);
        assert_eq!(counts.slug_collisions, 1);
        assert_eq!(
            objects(&triples, &dots, &terms.skos_notation),
            vec![
                Term::from(Literal::new_simple_literal("..")),
                Term::from(Literal::new_simple_literal("--")),
            ]
        );
    }

    #[test]
    fn slug_collisions_are_counted_not_resolved() {
        let terms = CubeTerms::new();
        let reference = reference();
        let mut registry = ConceptRegistry::new(&terms, &reference);
        let mut triples: Vec<Triple> = Vec::new();

        let underscore = registry.ethnicity("E_OTH", &mut triples).expect("concept");
        let dash = registry.ethnicity("E-OTH", &mut triples).expect("concept");

        assert_eq!(underscore, dash);
        let counts = registry.counts();
        assert_eq!(counts.ethnicity_concepts, 2);
        assert_eq!(counts.slug_collisions, 1);
    }
}
