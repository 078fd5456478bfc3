//! User-facing texts (French)

use foundcard_core::RejectReason;

use crate::notify::Toast;

/// Title and description of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastText {
    pub title: &'static str,
    pub description: &'static str,
}

pub const UNSUPPORTED_TYPE: ToastText = ToastText {
    title: "Format non supporté",
    description: "Veuillez sélectionner une image au format JPG ou PNG.",
};

pub const TOO_LARGE_TITLE: &str = "Fichier trop volumineux";

pub const UNAUTHENTICATED: ToastText = ToastText {
    title: "Connexion requise",
    description: "Vous devez être connecté pour signaler un document.",
};

pub const UPLOAD_FAILED: ToastText = ToastText {
    title: "Erreur",
    description: "Impossible d'envoyer la photo. Veuillez réessayer.",
};

pub const INSERT_FAILED: ToastText = ToastText {
    title: "Erreur",
    description: "Impossible d'enregistrer le signalement. Veuillez réessayer.",
};

pub const INVALID_REPORT: ToastText = ToastText {
    title: "Erreur",
    description: "Le formulaire contient des erreurs.",
};

pub const SUBMITTED: ToastText = ToastText {
    title: "Signalement envoyé",
    description: "Merci ! Le propriétaire du document pourra être prévenu.",
};

/// Refusal of a photo above `max_size_bytes`, stating the limit in force
pub fn too_large(max_size_bytes: u64) -> Toast {
    Toast::error_with(
        TOO_LARGE_TITLE,
        format!(
            "La taille maximale autorisée est de {}.",
            size_limit_label(max_size_bytes)
        ),
    )
}

/// Toast shown when the picker refuses a file
pub fn rejection(reason: RejectReason, max_size_bytes: u64) -> Toast {
    match reason {
        RejectReason::UnsupportedType => Toast::error(UNSUPPORTED_TYPE),
        RejectReason::TooLarge => too_large(max_size_bytes),
    }
}

// Whole units print without decimals ("5 Mo", "1 Ko").
fn size_limit_label(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes >= MIB {
        if bytes % MIB == 0 {
            format!("{} Mo", bytes / MIB)
        } else {
            format!("{:.1} Mo", bytes as f64 / MIB as f64)
        }
    } else if bytes >= KIB && bytes % KIB == 0 {
        format!("{} Ko", bytes / KIB)
    } else if bytes >= KIB {
        format!("{:.1} Ko", bytes as f64 / KIB as f64)
    } else {
        format!("{} octets", bytes)
    }
}
