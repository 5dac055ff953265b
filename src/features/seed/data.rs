//! Initial menu catalog inserted when the store has no categories.

pub struct SeedCategory {
    pub name: &'static str,
    pub slug: &'static str,
    pub items: &'static [SeedItem],
}

pub struct SeedItem {
    pub name_en: &'static str,
    pub name_ar: &'static str,
    pub price: &'static str,
    pub is_featured: bool,
}

const fn item(name_en: &'static str, name_ar: &'static str, price: &'static str) -> SeedItem {
    SeedItem {
        name_en,
        name_ar,
        price,
        is_featured: false,
    }
}

const fn featured(name_en: &'static str, name_ar: &'static str, price: &'static str) -> SeedItem {
    SeedItem {
        name_en,
        name_ar,
        price,
        is_featured: true,
    }
}

pub const CATALOG: &[SeedCategory] = &[
    SeedCategory {
        name: "Burgers",
        slug: "burgers",
        items: &[
            item("Classic Burger", "برجر كلاسيك", "$4.00"),
            item("Lebanese Burger", "برجر لبناني", "$4.00"),
            item("BBQ Burger", "برجر باربكيو", "$4.00"),
            featured("Oh My Cheese Burger", "برجر الجبن المذهل", "$5.50"),
        ],
    },
    SeedCategory {
        name: "Salads & Appetizers",
        slug: "salads",
        items: &[
            item("Fattoush", "فتوش", "$3.80"),
            item("Hummus", "حمص", "$3.00"),
        ],
    },
    SeedCategory {
        name: "Grilled Chicken",
        slug: "grilled",
        items: &[
            item("Charcoal-Grilled Chicken", "دجاج مشوي على الفحم", "$14.00"),
            item("Half Charcoal-Grilled Chicken", "نصف دجاج مشوي على الفحم", "$8.50"),
            item("Gas-Grilled Chicken", "دجاج مشوي على الغاز", "$10.00"),
            featured("1 Kilo Mixed Grill", "كيلو مشاوي متنوعة", "$18.00"),
        ],
    },
    SeedCategory {
        name: "Sandwiches",
        slug: "sandwiches",
        items: &[
            item("Large Charcoal-Grilled Chicken Sandwich", "ساندويتش دجاج مشوي كبير", "$5.00"),
            item("Medium Charcoal-Grilled Chicken Sandwich", "ساندويتش دجاج مشوي وسط", "$3.30"),
            item("Fries Sandwich", "ساندويتش بطاطس", "$1.80"),
            item("Large Tawook Sandwich", "ساندويتش طاووق كبير", "$5.00"),
            item("Medium Tawook Sandwich", "ساندويتش طاووق وسط", "$3.30"),
            item("Large Kafta Sandwich", "ساندويتش كفتة كبير", "$5.00"),
            item("Medium Kafta Sandwich", "ساندويتش كفتة وسط", "$3.30"),
            item("Large Grilled Meat Sandwich", "ساندويتش لحم مشوي كبير", "$5.00"),
            item("Medium Grilled Meat Sandwich", "ساندويتش لحم مشوي وسط", "$3.30"),
            item("Kafta Sub Sandwich", "ساندويتش كفتة ساب", "$3.30"),
            item("Sujok Sub Sandwich", "ساندويتش سجق ساب", "$3.30"),
        ],
    },
    SeedCategory {
        name: "Fries",
        slug: "fries",
        items: &[
            item("Large Fries Box", "صندوق بطاطس كبير", "$5.00"),
            item("Small Fries Box", "صندوق بطاطس صغير", "$2.20"),
        ],
    },
    SeedCategory {
        name: "Drinks",
        slug: "drinks",
        items: &[
            item("Soft Drink", "مشروب غازي", "100,000 L.L"),
            item("Laban", "لبن", "80,000 L.L"),
            item("Water", "ماء", "30,000 L.L"),
        ],
    },
    SeedCategory {
        name: "Combos",
        slug: "combos",
        items: &[item("Combo (Fries + Drink)", "كومبو (بطاطس + مشروب)", "$2.50")],
    },
];
