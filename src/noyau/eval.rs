//! Noyau — évaluation récursive de la pile (consommation droite→gauche)
//!
//! Contrat :
//! - fonction pure sur une vue immuable (&[Jeton]) : seuls les pousser_* du
//!   moteur mutent l'état stocké
//! - le sommet logique est le dernier élément de la tranche
//! - échec = opérandes insuffisantes pour l'opération du sommet (ou une
//!   opération imbriquée) => (None, tranche d'origine), aucun résultat partiel

use super::jetons::Jeton;

/// Évalue une tranche de jetons depuis le sommet (dernier élément).
///
/// Retour:
/// - (Some(valeur), reste) si une valeur a pu être produite ; `reste` est la
///   partie non consommée (préfixe de la tranche d'entrée)
/// - (None, jetons) si opérandes insuffisantes ; la tranche d'origine est
///   rendue telle quelle
pub fn evaluer(jetons: &[Jeton]) -> (Option<f64>, &[Jeton]) {
    let (sommet, reste) = match jetons.split_last() {
        Some(division) => division,
        None => return (None, jetons),
    };

    match sommet {
        Jeton::Operande(valeur) => (Some(*valeur), reste),

        Jeton::OperationUnaire(_, operation) => match evaluer(reste) {
            (Some(operande), reste1) => (Some(operation(operande)), reste1),
            _ => (None, jetons),
        },

        Jeton::OperationBinaire(_, operation) => {
            // opérande1 = côté le plus récemment empilé (évalué en premier),
            // opérande2 = côté empilé avant
            if let (Some(operande1), reste1) = evaluer(reste) {
                if let (Some(operande2), reste2) = evaluer(reste1) {
                    return (Some(operation(operande1, operande2)), reste2);
                }
            }
            (None, jetons)
        }
    }
}
