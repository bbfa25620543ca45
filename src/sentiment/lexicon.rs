// Fixed Arabic sentiment lexicons, plus a handful of emoji.
//
// Entries are matched by substring containment in either direction, which
// lets attached prefixes and suffixes (ال, و, ب, ...) still hit the stem.

pub const POSITIVE: &[&str] = &[
    "سعيد", "رائع", "ممتاز", "جميل", "مبهر", "مذهل", "عظيم", "فرح", "سرور",
    "نجاح", "فوز", "إنجاز", "تقدم", "تطور", "ازدهار", "حب", "سلام", "أمل",
    "جيد", "حلو", "لطيف", "بديع", "فخم", "قوي", "عالي", "متميز", "فخور",
    "احتفال", "مباركة", "بركة", "خير", "نعمة", "هدية", "فرصة", "مكسب",
    "ابتسامة", "ضحك", "مرح", "بهجة", "حماس", "إبداع", "ذكاء", "موهبة",
    "شكر", "امتنان", "تقدير", "احترام", "كرم", "عطاء", "صدق", "وفاء",
    "👍", "❤️", "🎉", "💚", "✨", "🌟", "💪", "🔥", "يحيا", "مبروك",
];

pub const NEGATIVE: &[&str] = &[
    "حزين", "سيء", "فظيع", "مروع", "كارثة", "فشل", "خسارة", "هزيمة", "ألم",
    "غضب", "كره", "حقد", "ظلم", "معاناة", "مشكلة", "أزمة", "خطر", "تهديد",
    "سوء", "قبيح", "بشع", "ضعيف", "رديء", "تعيس", "محزن", "مؤلم", "مخيب",
    "فقر", "جوع", "مرض", "موت", "دمار", "خراب", "انهيار", "تراجع", "ضرر",
    "غش", "خداع", "كذب", "خيانة", "فساد", "جريمة", "عدوان", "حرب", "عنف",
    "خوف", "قلق", "توتر", "اكتئاب", "يأس", "إحباط", "ملل", "تعب", "إرهاق",
    "👎", "💔", "😢", "😡", "⚠️", "❌", "للأسف", "واحسرتاه",
];

pub const NEUTRAL: &[&str] = &[
    "الآن", "اليوم", "غداً", "أمس", "هنا", "هناك", "ربما", "لكن", "أو",
    "عن", "من", "إلى", "في", "على", "مع", "بعد", "قبل", "حول", "خلال",
    "كل", "بعض", "معظم", "جميع", "هذا", "ذلك", "تلك", "هؤلاء", "أولئك",
];

/// True when the token contains an entry or an entry contains the token.
pub fn matches(lexicon: &[&str], token: &str) -> bool {
    lexicon
        .iter()
        .any(|entry| token.contains(entry) || entry.contains(token))
}
