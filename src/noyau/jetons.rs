// src/noyau/jetons.rs

use std::fmt;

/// Un élément de la pile : opérande littérale ou opération nommée.
///
/// Les opérations portent des pointeurs `fn` sans capture : le jeton reste
/// `Clone + Debug` et le registre peut le dupliquer librement.
#[derive(Clone, Debug)]
pub enum Jeton {
    Operande(f64),

    /// Opération à un argument (symbole, fonction).
    OperationUnaire(String, fn(f64) -> f64),

    /// Opération à deux arguments (symbole, fonction).
    /// Convention d'arguments : voir eval.rs (opérande1 = côté le plus
    /// récemment empilé).
    OperationBinaire(String, fn(f64, f64) -> f64),
}

/// La forme canonique d'un jeton est son symbole (opérations) ou son
/// écriture décimale (opérandes). C'est aussi la clé de registre.
impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Operande(valeur) => write!(f, "{valeur}"),
            Jeton::OperationUnaire(symbole, _) => write!(f, "{symbole}"),
            Jeton::OperationBinaire(symbole, _) => write!(f, "{symbole}"),
        }
    }
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        out.push(j.to_string());
    }
    out.join(" ")
}
