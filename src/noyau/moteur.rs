//! Noyau — moteur d'accumulation NPI (pile + registre)
//!
//! Rôle : recevoir les poussées du collaborateur (couche de présentation) et
//! rendre le résultat courant après chaque poussée.
//!
//! Contrats :
//! - pousser n'échoue jamais : l'ajout a toujours lieu (symbole connu)
//! - la validité n'est jugée qu'à l'évaluation ; None = expression incomplète
//! - symbole inconnu : ignoré silencieusement, pile inchangée
//! - la pile ne fait que croître (le « C/AC » appartient à l'UI, pas au noyau)

use tracing::{debug, trace};

use super::eval::evaluer;
use super::jetons::{format_jetons, Jeton};
use super::registre::Registre;

#[derive(Clone, Debug)]
pub struct Moteur {
    pile: Vec<Jeton>,
    registre: Registre,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::nouveau()
    }
}

impl Moteur {
    /// Moteur vide, registre des opérations standard.
    pub fn nouveau() -> Self {
        Self {
            pile: Vec::new(),
            registre: Registre::standard(),
        }
    }

    /// Empile une opérande littérale puis réévalue toute la pile.
    pub fn pousser_operande(&mut self, valeur: f64) -> Option<f64> {
        self.pile.push(Jeton::Operande(valeur));

        let resultat = self.resultat();
        debug!(
            "opérande {valeur} empilée (profondeur {}) => {resultat:?}",
            self.pile.len()
        );
        resultat
    }

    /// Empile l'opération associée au symbole, si le registre la connaît,
    /// puis réévalue toute la pile. Symbole inconnu : pile inchangée, mais le
    /// résultat (de la pile telle quelle) est tout de même rendu.
    pub fn pousser_symbole(&mut self, symbole: &str) -> Option<f64> {
        if let Some(jeton) = self.registre.chercher(symbole) {
            self.pile.push(jeton.clone());
            debug!("symbole {symbole:?} empilé (profondeur {})", self.pile.len());
        } else {
            trace!("symbole inconnu {symbole:?} : pile inchangée");
        }

        self.resultat()
    }

    /// Évaluation complète de la pile, sans mutation.
    ///
    /// O(n) à chaque appel : pas de mémoïsation, la pile reste la seule
    /// source de vérité.
    pub fn resultat(&self) -> Option<f64> {
        let (resultat, _reste) = evaluer(&self.pile);
        resultat
    }

    /// Nombre de jetons actuellement empilés.
    pub fn profondeur(&self) -> usize {
        self.pile.len()
    }

    pub fn est_vide(&self) -> bool {
        self.pile.is_empty()
    }

    /// Rendu canonique de la pile (« démarche ») : jetons joints par espaces.
    pub fn affichage_pile(&self) -> String {
        format_jetons(&self.pile)
    }

    /// Accès lecture seule au registre (utile à la couche de lecture).
    pub fn registre(&self) -> &Registre {
        &self.registre
    }
}
