//! Bundled starter documents.
//!
//! The catalog has no storage layer; a fresh process starts from this fixed
//! set so search, preview, and the CLI have something to work with.

use crate::catalog::model::Document;

/// The four starter documents, in catalog (newest-first display) order.
pub fn seed_documents() -> Vec<Document> {
    vec![
        Document {
            id: "1".into(),
            title: "Rapport Trimestriel Q1 2024".into(),
            content: "Analyse des performances et des objectifs financiers pour le premier \
                      trimestre. Les revenus ont augmenté de 15% par rapport à l'année \
                      précédente, principalement grâce au lancement de notre nouveau produit. \
                      Les marges bénéficiaires restent stables. Les perspectives pour le T2 \
                      sont optimistes."
                .into(),
            upload_date: 1713139200, // 2024-04-15
            tags: vec!["finance".into(), "rapport".into(), "q1".into()],
        },
        Document {
            id: "2".into(),
            title: "Spécifications Marketing Produit V2".into(),
            content: "Ce document détaille les spécifications marketing pour la version 2 de \
                      notre produit phare. Il inclut les personas cibles, les messages clés, \
                      et la stratégie de lancement sur les réseaux sociaux. Le budget alloué \
                      est de 50 000€."
                .into(),
            upload_date: 1714608000, // 2024-05-02
            tags: vec!["marketing".into(), "produit".into(), "stratégie".into()],
        },
        Document {
            id: "3".into(),
            title: "Compte Rendu Réunion Projet Phoenix".into(),
            content: "Résumé de la réunion du 28 mai concernant le projet Phoenix. Points clés \
                      abordés : avancement du développement, blocages actuels, et prochaines \
                      étapes. L'équipe de développement a besoin de ressources supplémentaires \
                      pour respecter les délais."
                .into(),
            upload_date: 1716940800, // 2024-05-29
            tags: vec!["projet".into(), "réunion".into(), "phoenix".into()],
        },
        Document {
            id: "4".into(),
            title: "Guide de l'employé".into(),
            content: "Le guide complet pour tous les nouveaux employés. Il couvre la culture \
                      d'entreprise, les politiques internes, les avantages sociaux, et les \
                      informations de contact importantes. Une lecture obligatoire pour une \
                      intégration réussie."
                .into(),
            upload_date: 1704844800, // 2024-01-10
            tags: vec!["rh".into(), "guide".into(), "onboarding".into()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let docs = seed_documents();
        assert_eq!(docs.len(), 4);
        for (i, a) in docs.iter().enumerate() {
            for b in &docs[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn seed_tags_are_normalized() {
        for doc in seed_documents() {
            for tag in &doc.tags {
                assert_eq!(tag, &tag.trim().to_lowercase());
                assert!(!tag.is_empty());
            }
        }
    }
}
