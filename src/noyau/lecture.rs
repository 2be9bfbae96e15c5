// src/noyau/lecture.rs
//
// Lecture d'une séquence NPI textuelle (« 10 2 ÷ ») vers le moteur.
// -----------------------------------------------------------------
// Règles:
// - séparation sur les blancs (espace, tabulation, retour ligne)
// - chaque mot est d'abord tenté comme littéral f64 : « -5 » est une
//   opérande, « - » seul est l'opérateur
// - sinon le mot doit être un symbole connu du registre
// - mot inconnu ou entrée vide : erreur de lecture (Result) — le noyau
//   lui-même, lui, ne signale jamais d'erreur (None seulement)

use tracing::debug;

use super::moteur::Moteur;

/// Pousse chaque mot de `texte` dans `moteur`, puis rend le résultat de
/// l'évaluation finale.
///
/// Retour:
/// - Ok(Some(v)) : séquence lue, expression évaluable
/// - Ok(None)    : séquence lue, expression incomplète
/// - Err(msg)    : entrée vide ou mot inconnu (les mots déjà lus restent
///   empilés : le moteur reste utilisable)
pub fn lire_npi(moteur: &mut Moteur, texte: &str) -> Result<Option<f64>, String> {
    let s = texte.trim();
    if s.is_empty() {
        return Err("Entrée vide".into());
    }

    let mut mots = 0usize;
    for mot in s.split_whitespace() {
        if let Ok(valeur) = mot.parse::<f64>() {
            moteur.pousser_operande(valeur);
            mots += 1;
            continue;
        }

        if moteur.registre().contient(mot) {
            moteur.pousser_symbole(mot);
            mots += 1;
            continue;
        }

        return Err(format!("symbole inconnu: '{mot}'"));
    }

    let resultat = moteur.resultat();
    debug!("{mots} mots lus (profondeur {}) => {resultat:?}", moteur.profondeur());
    Ok(resultat)
}

/// Évalue une séquence NPI en un coup, sur un moteur neuf.
pub fn evaluer_npi(texte: &str) -> Result<Option<f64>, String> {
    let mut moteur = Moteur::nouveau();
    lire_npi(&mut moteur, texte)
}
