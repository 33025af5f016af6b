//! Static knowledge table: category → canned response + expression.
//!
//! The classifier emits a label string; labels map onto a fixed
//! [`Category`] enum with an explicit default arm, so an unseen label can
//! never escape the table. Response texts are the scripted persona lines
//! and are not user-editable at runtime.

use serde::{Deserialize, Serialize};

/// Display expression selecting which portrait the shell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    /// Resting face, also the fallback for unknown input.
    Neutre,
    Sourire,
    Serieux,
    /// Shown while a synthesis task is playing.
    Parle,
    /// Shown while a capture task is listening.
    Ecoute,
    Etonne,
    Pense,
}

impl Expression {
    /// All expressions, in gallery order.
    pub const ALL: [Expression; 7] = [
        Expression::Neutre,
        Expression::Sourire,
        Expression::Serieux,
        Expression::Parle,
        Expression::Ecoute,
        Expression::Etonne,
        Expression::Pense,
    ];

    /// Stable lowercase name, used for gallery filenames and event payloads.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Expression::Neutre => "neutre",
            Expression::Sourire => "sourire",
            Expression::Serieux => "serieux",
            Expression::Parle => "parle",
            Expression::Ecoute => "ecoute",
            Expression::Etonne => "etonne",
            Expression::Pense => "pense",
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response category selected by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Independance,
    Femme,
    Education,
    Modernisation,
    Economie,
    Sante,
    Culture,
    Histoire,
    Politique,
    /// Fallback for labels absent from the table.
    Default,
}

impl Category {
    /// All categories, default last.
    pub const ALL: [Category; 10] = [
        Category::Independance,
        Category::Femme,
        Category::Education,
        Category::Modernisation,
        Category::Economie,
        Category::Sante,
        Category::Culture,
        Category::Histoire,
        Category::Politique,
        Category::Default,
    ];

    /// Map a classifier label to a category. Unknown labels degrade to
    /// [`Category::Default`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "independance" => Category::Independance,
            "femme" => Category::Femme,
            "education" => Category::Education,
            "modernisation" => Category::Modernisation,
            "economie" => Category::Economie,
            "sante" => Category::Sante,
            "culture" => Category::Culture,
            "histoire" => Category::Histoire,
            "politique" => Category::Politique,
            _ => Category::Default,
        }
    }

    /// The label string this category corresponds to.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Independance => "independance",
            Category::Femme => "femme",
            Category::Education => "education",
            Category::Modernisation => "modernisation",
            Category::Economie => "economie",
            Category::Sante => "sante",
            Category::Culture => "culture",
            Category::Histoire => "histoire",
            Category::Politique => "politique",
            Category::Default => "default",
        }
    }

    /// The canned response body for this category.
    #[must_use]
    pub fn response_text(self) -> &'static str {
        match self {
            Category::Independance => {
                "L'indépendance du 20 mars 1956 fut le couronnement de notre long combat ! \
                 La Tunisie redevint maîtresse de son destin après des décennies de lutte."
            }
            Category::Femme => {
                "Le Code du Statut Personnel de 1956 fut une révolution ! J'ai libéré la \
                 femme tunisienne pour qu'elle participe pleinement au développement de \
                 notre nation."
            }
            Category::Education => {
                "L'éducation est le fondement du progrès ! J'ai toujours dit : \
                 'Instruisez-vous ! Éduquez-vous !' Une nation sans éducation est une \
                 nation sans avenir."
            }
            Category::Modernisation => {
                "La modernisation de la Tunisie fut mon grand combat ! Éducation, santé, \
                 infrastructure... Nous avons tout entrepris pour hisser notre pays vers \
                 la modernité."
            }
            Category::Economie => {
                "L'économie doit servir le peuple ! J'ai œuvré pour le développement \
                 équilibré de toutes les régions et pour l'autosuffisance nationale."
            }
            Category::Sante => {
                "La santé publique fut une priorité absolue ! Nous avons construit des \
                 hôpitaux, formé des médecins, pour que chaque Tunisien ait accès aux \
                 soins."
            }
            Category::Culture => {
                "Notre culture est millénaire et riche ! Elle synthétise notre histoire \
                 phénicienne, romaine, arabe et méditerranéenne. Quelle richesse !"
            }
            Category::Histoire => {
                "Notre histoire est un roman épique ! Des Carthaginois aux Hafsides, de \
                 la lutte pour l'indépendance à la construction moderne, chaque page est \
                 glorieuse !"
            }
            Category::Politique => {
                "La politique doit être au service du peuple. J'ai toujours œuvré pour \
                 l'unité nationale et le progrès social. Telle fut ma ligne directrice."
            }
            Category::Default => {
                "Votre réflexion est intéressante ! Comme je le disais souvent, le \
                 dialogue est source de progrès. Parlons plutôt de notre chère Tunisie \
                 et de son développement."
            }
        }
    }

    /// The expression shown alongside this category's response.
    #[must_use]
    pub fn expression(self) -> Expression {
        match self {
            Category::Independance => Expression::Etonne,
            Category::Femme => Expression::Sourire,
            Category::Education => Expression::Serieux,
            Category::Modernisation => Expression::Pense,
            Category::Economie => Expression::Serieux,
            Category::Sante => Expression::Sourire,
            Category::Culture => Expression::Etonne,
            Category::Histoire => Expression::Etonne,
            Category::Politique => Expression::Serieux,
            Category::Default => Expression::Neutre,
        }
    }
}
