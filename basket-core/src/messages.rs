//! Localized user-facing text
//!
//! The core reports outcomes as [`CommandError`] values; this is the message
//! catalog front ends use to turn them into text, keyed by
//! `(Language, ErrorKind)`. `{item}` and `{command}` are substituted.

use crate::error::{CommandError, ErrorKind};
use crate::language::Language;

/// Labels and message templates for one language
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub input_placeholder: &'static str,
    pub shopping_list: &'static str,
    pub quantity: &'static str,
    pub suggestions: &'static str,
    pub seasonal: &'static str,
    pub total: &'static str,
    pub empty_list: &'static str,
    error_not_found: &'static str,
    error_out_of_stock: &'static str,
    error_max_stock: &'static str,
    processed_command: &'static str,
}

static ENGLISH: Messages = Messages {
    title: "Voice Command Shopping Assistant",
    input_placeholder: "Type an item...",
    shopping_list: "Shopping List",
    quantity: "Qty",
    suggestions: "Suggestions",
    seasonal: "Seasonal",
    total: "Total",
    empty_list: "Your list is empty.",
    error_not_found: "Sorry, \"{item}\" is not available in our stock.",
    error_out_of_stock: "Sorry, \"{item}\" is out of stock.",
    error_max_stock: "You've reached the maximum available quantity for \"{item}\".",
    processed_command: "Processed command: {command}",
};

static SPANISH: Messages = Messages {
    title: "Asistente de Compras por Voz",
    input_placeholder: "Escribe un artículo...",
    shopping_list: "Lista de Compras",
    quantity: "Cant",
    suggestions: "Sugerencias",
    seasonal: "De Temporada",
    total: "Total",
    empty_list: "Tu lista está vacía.",
    error_not_found: "Lo siento, \"{item}\" no está disponible en nuestro stock.",
    error_out_of_stock: "Lo siento, \"{item}\" está agotado.",
    error_max_stock: "Has alcanzado la cantidad máxima disponible para \"{item}\".",
    processed_command: "Comando procesado: {command}",
};

static FRENCH: Messages = Messages {
    title: "Assistant d'Achat à Commande Vocale",
    input_placeholder: "Tapez un article...",
    shopping_list: "Liste de Courses",
    quantity: "Qté",
    suggestions: "Suggestions",
    seasonal: "De Saison",
    total: "Total",
    empty_list: "Votre liste est vide.",
    error_not_found: "Désolé, \"{item}\" n'est pas disponible dans notre stock.",
    error_out_of_stock: "Désolé, \"{item}\" est en rupture de stock.",
    error_max_stock: "Vous avez atteint la quantité maximale disponible pour \"{item}\".",
    processed_command: "Commande traitée : {command}",
};

impl Messages {
    /// Message set for `language`
    pub fn for_language(language: Language) -> &'static Messages {
        match language {
            Language::En => &ENGLISH,
            Language::Es => &SPANISH,
            Language::Fr => &FRENCH,
        }
    }

    /// Template for an error kind
    ///
    /// Invalid quantities ("add 0 milk") share the "not available" wording.
    pub fn error_template(&self, kind: ErrorKind) -> &'static str {
        match kind {
            ErrorKind::ItemNotFound | ErrorKind::InvalidQuantity => self.error_not_found,
            ErrorKind::NotAvailable => self.error_out_of_stock,
            ErrorKind::MaxStockExceeded => self.error_max_stock,
        }
    }

    /// Localized text for a command error
    pub fn error(&self, error: &CommandError) -> String {
        self.error_template(error.kind())
            .replace("{item}", error.phrase())
    }

    /// Acknowledgement of a processed command
    pub fn processed(&self, command: &str) -> String {
        self.processed_command.replace("{command}", command)
    }
}
