//! Static product catalog.
//!
//! DESIGN
//! ======
//! Product data is compiled into the client: category pages are pure display
//! and the backend has no product endpoints. The catalog is the single source
//! the cart and category pages key into by product id.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Product category, one per storefront page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Cpus,
    Gpus,
    Ram,
    Storage,
    PowerSupplies,
}

impl Category {
    /// All categories, in navbar order.
    pub const ALL: [Category; 5] = [
        Category::Cpus,
        Category::Gpus,
        Category::Ram,
        Category::Storage,
        Category::PowerSupplies,
    ];

    /// Page heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Category::Cpus => "CPUs",
            Category::Gpus => "GPUs",
            Category::Ram => "RAM",
            Category::Storage => "Storage",
            Category::PowerSupplies => "Power Supplies",
        }
    }

    /// Route path for the category page.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Category::Cpus => "/cpus",
            Category::Gpus => "/gpus",
            Category::Ram => "/ram",
            Category::Storage => "/storage",
            Category::PowerSupplies => "/powersupplies",
        }
    }
}

/// A catalog entry. Prices are integer cents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub price_cents: i64,
    pub blurb: &'static str,
}

pub const PRODUCTS: &[Product] = &[
    // CPUs
    Product {
        id: "cpu-ryzen-7600",
        name: "AMD Ryzen 5 7600",
        category: Category::Cpus,
        price_cents: 22_999,
        blurb: "6 cores / 12 threads, AM5, boxed cooler included.",
    },
    Product {
        id: "cpu-ryzen-7800x3d",
        name: "AMD Ryzen 7 7800X3D",
        category: Category::Cpus,
        price_cents: 44_900,
        blurb: "8 cores with 3D V-Cache, the gaming pick.",
    },
    Product {
        id: "cpu-core-i5-14600k",
        name: "Intel Core i5-14600K",
        category: Category::Cpus,
        price_cents: 31_499,
        blurb: "14 cores (6P+8E), unlocked, LGA1700.",
    },
    Product {
        id: "cpu-core-i9-14900k",
        name: "Intel Core i9-14900K",
        category: Category::Cpus,
        price_cents: 58_900,
        blurb: "24 cores (8P+16E), top of the LGA1700 stack.",
    },
    // GPUs
    Product {
        id: "gpu-rtx-4070-super",
        name: "NVIDIA GeForce RTX 4070 Super",
        category: Category::Gpus,
        price_cents: 59_900,
        blurb: "12 GB GDDR6X, 1440p sweet spot.",
    },
    Product {
        id: "gpu-rtx-4090",
        name: "NVIDIA GeForce RTX 4090",
        category: Category::Gpus,
        price_cents: 179_900,
        blurb: "24 GB GDDR6X, no-compromise 4K.",
    },
    Product {
        id: "gpu-rx-7800-xt",
        name: "AMD Radeon RX 7800 XT",
        category: Category::Gpus,
        price_cents: 49_900,
        blurb: "16 GB GDDR6, strong 1440p rasterization.",
    },
    Product {
        id: "gpu-arc-a770",
        name: "Intel Arc A770",
        category: Category::Gpus,
        price_cents: 27_900,
        blurb: "16 GB GDDR6, budget AV1 encoding workhorse.",
    },
    // RAM
    Product {
        id: "ram-vengeance-ddr5-32",
        name: "Corsair Vengeance 32 GB DDR5-6000",
        category: Category::Ram,
        price_cents: 10_499,
        blurb: "2x16 GB, CL30, EXPO and XMP profiles.",
    },
    Product {
        id: "ram-trident-z5-32",
        name: "G.Skill Trident Z5 RGB 32 GB DDR5-6400",
        category: Category::Ram,
        price_cents: 12_999,
        blurb: "2x16 GB, CL32, RGB light bar.",
    },
    Product {
        id: "ram-ripjaws-ddr4-16",
        name: "G.Skill Ripjaws V 16 GB DDR4-3600",
        category: Category::Ram,
        price_cents: 3_999,
        blurb: "2x8 GB, CL16, budget AM4/LGA1200 kit.",
    },
    // Storage
    Product {
        id: "ssd-980-pro-2tb",
        name: "Samsung 980 Pro 2 TB NVMe",
        category: Category::Storage,
        price_cents: 16_999,
        blurb: "PCIe 4.0, 7000 MB/s reads.",
    },
    Product {
        id: "ssd-sn850x-1tb",
        name: "WD Black SN850X 1 TB NVMe",
        category: Category::Storage,
        price_cents: 8_999,
        blurb: "PCIe 4.0 with game mode firmware.",
    },
    Product {
        id: "ssd-mx500-1tb",
        name: "Crucial MX500 1 TB SATA",
        category: Category::Storage,
        price_cents: 5_999,
        blurb: "2.5-inch SATA, dependable bulk storage.",
    },
    Product {
        id: "hdd-barracuda-4tb",
        name: "Seagate Barracuda 4 TB",
        category: Category::Storage,
        price_cents: 7_499,
        blurb: "3.5-inch 5400 RPM, mass storage.",
    },
    // Power supplies
    Product {
        id: "psu-rm850x",
        name: "Corsair RM850x 850 W",
        category: Category::PowerSupplies,
        price_cents: 13_999,
        blurb: "80+ Gold, fully modular, quiet fan profile.",
    },
    Product {
        id: "psu-focus-gx-750",
        name: "Seasonic Focus GX-750 750 W",
        category: Category::PowerSupplies,
        price_cents: 10_999,
        blurb: "80+ Gold, fully modular, 10-year warranty.",
    },
    Product {
        id: "psu-thor-1000",
        name: "ASUS ROG Thor 1000 W Platinum II",
        category: Category::PowerSupplies,
        price_cents: 29_999,
        blurb: "80+ Platinum, OLED power draw display.",
    },
];

/// Products belonging to `category`, in catalog order.
#[must_use]
pub fn products_in(category: Category) -> Vec<&'static Product> {
    PRODUCTS.iter().filter(|p| p.category == category).collect()
}

/// Look up a product by id.
#[must_use]
pub fn find_product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Format integer cents as a dollar string, e.g. `$229.99`.
#[must_use]
pub fn format_price(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
