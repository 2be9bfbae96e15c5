//! Noyau NPI (notation polonaise inversée)
//!
//! Organisation interne :
//! - jetons.rs   : jetons (opérandes / opérations) + forme canonique
//! - registre.rs : registre symbole -> opération, construit une fois
//! - eval.rs     : évaluation récursive droite→gauche de la pile
//! - moteur.rs   : API publique pousser/évaluer
//! - lecture.rs  : lecture d'une séquence NPI textuelle

pub mod eval;
pub mod jetons;
pub mod lecture;
pub mod moteur;
pub mod registre;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use jetons::Jeton;
pub use lecture::{evaluer_npi, lire_npi};
pub use moteur::Moteur;
pub use registre::Registre;
