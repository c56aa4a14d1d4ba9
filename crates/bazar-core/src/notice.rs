//! User-visible notices
//!
//! Outcomes the user is told about. Messages are rendered in either UI
//! language at display time.

use crate::domain::Language;
use crate::error::{CaptureError, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ListCreated { name: String },
    ListDeleted,
    ProtectedList,
    DuplicateItem { name: String },
    ItemAdded { name: String },
    IngredientsAdded { count: usize },
    NoIngredients,
    IngredientsAlreadyListed,
    NoActiveList,
    PersistedDataCorrupt,
    PersistFailed,
    CaptureUnavailable,
    PermissionDenied,
    NetworkError,
    CaptureFailed { code: String },
    CaptureStartFailed,
}

impl Message {
    pub fn text(&self, lang: Language) -> String {
        match self {
            Message::ListCreated { name } => match lang {
                Language::Bengali => format!("তালিকা \"{}\" তৈরি হয়েছে", name),
                Language::English => format!("List \"{}\" created", name),
            },
            Message::ListDeleted => lang.t("তালিকা মুছে ফেলা হয়েছে", "List deleted").to_string(),
            Message::ProtectedList => lang
                .t("পূজার তালিকা মুছতে পারবেন না", "Festival lists cannot be deleted")
                .to_string(),
            Message::DuplicateItem { name } => match lang {
                Language::Bengali => format!("\"{}\" আগে থেকেই তালিকায় আছে", name),
                Language::English => format!("\"{}\" is already on the list", name),
            },
            Message::ItemAdded { name } => match lang {
                Language::Bengali => format!("\"{}\" যোগ করা হয়েছে", name),
                Language::English => format!("\"{}\" added", name),
            },
            Message::IngredientsAdded { count } => match lang {
                Language::Bengali => format!("{} টি উপকরণ যোগ করা হয়েছে", count),
                Language::English => format!("{} ingredients added", count),
            },
            Message::NoIngredients => lang.t("কোন উপকরণ খুঁজে পাওয়া যায়নি", "No ingredients found").to_string(),
            Message::IngredientsAlreadyListed => lang
                .t("সব উপকরণ আগে থেকেই তালিকায় আছে", "All ingredients are already on the list")
                .to_string(),
            Message::NoActiveList => lang.t("কোন তালিকা নির্বাচন করা হয়নি", "No list selected").to_string(),
            Message::PersistedDataCorrupt => lang
                .t("সংরক্ষিত তালিকা পড়া যায়নি", "Saved lists could not be read")
                .to_string(),
            Message::PersistFailed => lang
                .t("তালিকা সংরক্ষণ করা যায়নি", "Lists could not be saved")
                .to_string(),
            Message::CaptureUnavailable => lang
                .t("আপনার ব্রাউজারে ভয়েস ইনপুট সমর্থিত নয়", "Voice input is not supported in your browser")
                .to_string(),
            Message::PermissionDenied => lang
                .t("মাইক্রোফোনে অনুমতি দেয়া হয়নি", "Microphone permission denied")
                .to_string(),
            Message::NetworkError => lang.t("নেটওয়ার্ক সমস্যা", "Network problem").to_string(),
            Message::CaptureFailed { code } => match lang {
                Language::Bengali => format!("ত্রুটি: {}", code),
                Language::English => format!("Error: {}", code),
            },
            Message::CaptureStartFailed => lang
                .t("ভয়েস ইনপুট শুরু করতে সমস্যা হচ্ছে", "Could not start voice input")
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: Message,
}

impl Notice {
    pub fn success(message: Message) -> Self {
        Self { level: NoticeLevel::Success, message }
    }

    pub fn info(message: Message) -> Self {
        Self { level: NoticeLevel::Info, message }
    }

    pub fn warning(message: Message) -> Self {
        Self { level: NoticeLevel::Warning, message }
    }

    pub fn error(message: Message) -> Self {
        Self { level: NoticeLevel::Error, message }
    }

    pub fn text(&self, lang: Language) -> String {
        self.message.text(lang)
    }
}

impl StoreError {
    /// The notice for this rejection, if the user should see one
    pub fn notice(&self) -> Option<Notice> {
        match self {
            StoreError::ProtectedList(_) => Some(Notice::warning(Message::ProtectedList)),
            StoreError::DuplicateItem(name) => Some(Notice::info(Message::DuplicateItem { name: name.clone() })),
            StoreError::EmptyExtraction => Some(Notice::error(Message::NoIngredients)),
            StoreError::ListNotFound(_) | StoreError::ItemNotFound(_) | StoreError::EmptyName => None,
        }
    }
}

impl From<&CaptureError> for Notice {
    fn from(err: &CaptureError) -> Self {
        match err {
            CaptureError::Unavailable => Notice::error(Message::CaptureUnavailable),
            CaptureError::PermissionDenied => Notice::error(Message::PermissionDenied),
            CaptureError::Network => Notice::error(Message::NetworkError),
            CaptureError::SessionActive => Notice::info(Message::CaptureStartFailed),
            CaptureError::Engine(code) => Notice::error(Message::CaptureFailed { code: code.clone() }),
        }
    }
}
