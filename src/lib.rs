// src/lib.rs
//
// Calculatrice NPI — noyau d'accumulation (pile + registre), sans UI
// ------------------------------------------------------------------
// But:
// - le moteur reçoit opérandes et symboles d'opération, réévalue la pile
//   complète à chaque poussée et rend Option<f64> (None = incomplet)
// - la couche de présentation (saisie des chiffres, affichage du résultat)
//   vit ailleurs : ici, uniquement la sémantique NPI
//
// IMPORTANT (structure projet):
// - toute la logique vit dans src/noyau/ (un module par responsabilité)
// - ce fichier : câblage + ré-exports seulement

pub mod noyau;

pub use noyau::{evaluer_npi, lire_npi, Jeton, Moteur, Registre};
