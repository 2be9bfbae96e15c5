// src/noyau/registre.rs
//
// Registre des opérations connues : symbole -> jeton.
// ---------------------------------------------------
// - construit une fois (opérations standard), jamais modifié ensuite
// - la clé est exactement la forme canonique du jeton (son Display)
// - pas de retrait : une calculatrice n'oublie pas ses touches

use std::collections::HashMap;

use super::jetons::Jeton;

#[derive(Clone, Debug, Default)]
pub struct Registre {
    table: HashMap<String, Jeton>,
}

impl Registre {
    /// Registre vide (surtout utile en test).
    pub fn vide() -> Self {
        Self::default()
    }

    /// Registre des opérations standard de la calculatrice.
    ///
    /// Convention binaire (voir eval.rs) : opérande1 = côté le plus
    /// récemment empilé, opérande2 = côté empilé avant. D'où `÷` = o2/o1 et
    /// `-` = o2-o1 : « 10 2 ÷ » donne 5, « 10 2 - » donne 8. Ne pas
    /// « corriger » : tous les résultats de ÷ et - en dépendent.
    pub fn standard() -> Self {
        let mut r = Self::vide();

        r.inscrire(Jeton::OperationBinaire("×".to_string(), |o1, o2| o1 * o2));
        r.inscrire(Jeton::OperationBinaire("÷".to_string(), |o1, o2| o2 / o1));
        r.inscrire(Jeton::OperationBinaire("+".to_string(), |o1, o2| o1 + o2));
        r.inscrire(Jeton::OperationBinaire("-".to_string(), |o1, o2| o2 - o1));
        r.inscrire(Jeton::OperationUnaire("√".to_string(), f64::sqrt));
        r.inscrire(Jeton::OperationUnaire("Sin".to_string(), f64::sin));
        r.inscrire(Jeton::OperationUnaire("Cos".to_string(), f64::cos));

        r
    }

    /// Insère (ou remplace) un jeton sous sa forme canonique.
    pub fn inscrire(&mut self, jeton: Jeton) {
        self.table.insert(jeton.to_string(), jeton);
    }

    /// Cherche un symbole. None si inconnu.
    pub fn chercher(&self, symbole: &str) -> Option<&Jeton> {
        self.table.get(symbole)
    }

    pub fn contient(&self, symbole: &str) -> bool {
        self.table.contains_key(symbole)
    }

    /// Nombre d'opérations inscrites.
    pub fn taille(&self) -> usize {
        self.table.len()
    }
}
