//! Tests scientifiques (campagne) : exactitude + invariants + bords IEEE.
//!
//! But : couvrir le contrat du moteur sans redire les tests unitaires.
//! - arithmétique exacte pour + - × ÷ (valeurs littérales)
//! - tolérance explicite pour √ Sin Cos
//! - bords IEEE assumés : ÷ 0 => ±inf, √ négatif => NaN (pas d'« indéfini »
//!   dans un noyau f64)

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_6};

use super::lecture::evaluer_npi;
use super::moteur::Moteur;

fn npi_ok(seq: &str) -> f64 {
    match evaluer_npi(seq) {
        Ok(Some(v)) => v,
        autre => panic!("seq={seq:?} : attendu une valeur, obtenu {autre:?}"),
    }
}

fn assert_proche(obtenu: f64, attendu: f64) {
    const TOL: f64 = 1e-12;
    assert!(
        (obtenu - attendu).abs() <= TOL,
        "obtenu={obtenu} attendu={attendu}"
    );
}

/* ------------------------ Arithmétique exacte ------------------------ */

#[test]
fn sci_quatre_operations() {
    assert_eq!(npi_ok("3 4 +"), 7.0);
    assert_eq!(npi_ok("3 4 ×"), 12.0);
    assert_eq!(npi_ok("10 2 ÷"), 5.0);
    assert_eq!(npi_ok("10 2 -"), 8.0);
}

#[test]
fn sci_division_soustraction_sens() {
    // ÷ et - sont sensibles à l'ordre ; l'ordre inverse change le résultat
    assert_eq!(npi_ok("2 10 ÷"), 0.2);
    assert_eq!(npi_ok("2 10 -"), -8.0);
}

#[test]
fn sci_expressions_composees() {
    assert_eq!(npi_ok("3 4 + 2 ×"), 14.0);
    assert_eq!(npi_ok("9 √ 16 √ +"), 7.0);
    assert_eq!(npi_ok("4 9 × √"), 6.0);
    assert_eq!(npi_ok("1 2 + 3 + 4 +"), 10.0);
}

/* ------------------------ √ et trig (tolérance) ------------------------ */

#[test]
fn sci_racine_carree() {
    assert_eq!(npi_ok("16 √"), 4.0);
    assert_eq!(npi_ok("81 √ √"), 3.0);
    assert_proche(npi_ok("2 √"), std::f64::consts::SQRT_2);
}

#[test]
fn sci_trig_en_radians() {
    assert_eq!(npi_ok("0 Sin"), 0.0);
    assert_eq!(npi_ok("0 Cos"), 1.0);

    let mut m = Moteur::nouveau();
    m.pousser_operande(FRAC_PI_6);
    assert_proche(m.pousser_symbole("Sin").unwrap(), 0.5);

    let mut m = Moteur::nouveau();
    m.pousser_operande(FRAC_PI_3);
    assert_proche(m.pousser_symbole("Cos").unwrap(), 0.5);

    let mut m = Moteur::nouveau();
    m.pousser_operande(FRAC_PI_2);
    assert_proche(m.pousser_symbole("Sin").unwrap(), 1.0);
}

/* ------------------------ Bords IEEE ------------------------ */

#[test]
fn sci_division_par_zero() {
    let v = npi_ok("2 0 ÷");
    assert!(v.is_infinite() && v.is_sign_positive(), "obtenu: {v}");

    let v = npi_ok("-2 0 ÷");
    assert!(v.is_infinite() && v.is_sign_negative(), "obtenu: {v}");
}

#[test]
fn sci_racine_de_negatif() {
    assert!(npi_ok("-4 √").is_nan());
}

/* ------------------------ Invariants du moteur ------------------------ */

#[test]
fn sci_profondeur_ne_croit_que_d_un() {
    let mut m = Moteur::nouveau();
    for (k, v) in [1.0, 2.0, 3.0].into_iter().enumerate() {
        m.pousser_operande(v);
        assert_eq!(m.profondeur(), k + 1);
    }

    m.pousser_symbole("+");
    assert_eq!(m.profondeur(), 4);

    // inconnu : rien n'est empilé
    m.pousser_symbole("log");
    assert_eq!(m.profondeur(), 4);
}

#[test]
fn sci_symbole_inconnu_rend_le_resultat_courant() {
    let mut m = Moteur::nouveau();
    m.pousser_operande(10.0);
    m.pousser_operande(2.0);
    m.pousser_symbole("÷");

    let avant = m.resultat();
    assert_eq!(m.pousser_symbole("÷÷"), avant);
    assert_eq!(m.pousser_symbole(""), avant);
    assert_eq!(avant, Some(5.0));
}

#[test]
fn sci_pile_croissante_resultats_successifs() {
    // chaque poussée rend le résultat de la pile entière, telle quelle
    let mut m = Moteur::nouveau();
    assert_eq!(m.pousser_operande(10.0), Some(10.0));
    assert_eq!(m.pousser_operande(2.0), Some(2.0)); // le sommet gagne
    assert_eq!(m.pousser_symbole("÷"), Some(5.0));
    assert_eq!(m.pousser_symbole("√"), Some(5f64.sqrt()));
    assert_eq!(m.affichage_pile(), "10 2 ÷ √");
}
