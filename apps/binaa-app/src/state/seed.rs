//! # Seed Data
//!
//! Contents of the slots on a fresh installation. Each collection is seeded
//! on its own: an empty `stores` slot gets the sample stores even when the
//! `categories` slot already holds edited data.

use binaa_core::{
    AppSettings, Category, CategoryIcon, Coordinates, Province, Store, User,
};
use chrono::{DateTime, Utc};

pub fn default_settings() -> AppSettings {
    AppSettings::default()
}

/// The six starter categories.
pub fn default_categories() -> Vec<Category> {
    [
        ("1", "إسمنت", CategoryIcon::Layers, "bg-gray-200 text-gray-700"),
        ("2", "حديد", CategoryIcon::HardHat, "bg-orange-100 text-orange-600"),
        ("3", "رمل وبحص", CategoryIcon::Waves, "bg-yellow-100 text-yellow-700"),
        ("4", "دهان", CategoryIcon::Paintbrush, "bg-blue-100 text-blue-600"),
        ("5", "أدوات صحية", CategoryIcon::Pipette, "bg-cyan-100 text-cyan-700"),
        ("6", "كهرباء", CategoryIcon::Zap, "bg-amber-100 text-amber-700"),
    ]
    .into_iter()
    .map(|(id, name, icon_name, color)| Category {
        id: id.to_string(),
        name: name.to_string(),
        icon_name,
        image: None,
        color: color.to_string(),
    })
    .collect()
}

/// Two sample stores, stamped with `now`.
pub fn default_stores(now: DateTime<Utc>) -> Vec<Store> {
    vec![
        Store {
            id: "1".to_string(),
            name: "الشركة السورية للحديد والصلب".to_string(),
            description: "أفضل أنواع الحديد للبناء المسلح بجميع القياسات والمواصفات العالمية."
                .to_string(),
            category_id: "2".to_string(),
            city: Province::Damascus,
            neighborhood: "الحريقة".to_string(),
            images: vec!["https://picsum.photos/seed/iron/800/600".to_string()],
            whatsapp: "963912345678".to_string(),
            location: Coordinates::DEFAULT,
            working_hours: "8:00 AM - 6:00 PM".to_string(),
            rating: 4.8,
            ratings: Vec::new(),
            created_at: now,
        },
        Store {
            id: "2".to_string(),
            name: "عالم الدهانات الحديثة".to_string(),
            description: "وكلاء حصريون لأرقى أنواع الدهانات والطلاءات الإنشائية والديكورية."
                .to_string(),
            category_id: "3".to_string(),
            city: Province::Aleppo,
            neighborhood: "الجميلية".to_string(),
            images: vec!["https://picsum.photos/seed/paint/800/600".to_string()],
            whatsapp: "963922334455".to_string(),
            location: Coordinates {
                lat: 36.2021,
                lng: 37.1343,
            },
            working_hours: "9:00 AM - 8:00 PM".to_string(),
            rating: 4.5,
            ratings: Vec::new(),
            created_at: now,
        },
    ]
}

/// Puts the reserved super-admin first unless an account already holds the
/// reserved username or e-mail.
pub fn ensure_super_admin(mut users: Vec<User>, now: DateTime<Utc>) -> Vec<User> {
    if !users.iter().any(User::is_reserved_super_admin) {
        users.insert(0, User::super_admin(now));
    }
    users
}
