// =============================================================================
// Toorrii Web - Arabic Strings (RTL)
// =============================================================================

pub(super) fn lookup(key: &str) -> Option<&'static str> {
    let text = match key {
        "brand.tagline" => "الإدارة الذكية لطوابير الانتظار.",

        "nav.home" => "الرئيسية",
        "nav.about" => "من نحن",
        "nav.partnerships" => "الشراكات",
        "nav.contact" => "اتصل بنا",
        "nav.language" => "اللغة",
        "nav.menu" => "فتح القائمة",
        "nav.closeMenu" => "إغلاق القائمة",

        "footer.explore" => "استكشف",
        "footer.reachUs" => "تواصل معنا",
        "footer.rights" => "جميع الحقوق محفوظة.",

        "hero.title" => "وداعاً لطوابير الانتظار",
        "hero.subtitle" => "احجز دورك من هاتفك، وتابع الطابور مباشرة، واحضر في الوقت المناسب تماماً.",
        "hero.cta" => "ابدأ الآن",
        "hero.stat1" => "مستخدم نشط",
        "hero.stat2" => "موعد يومياً",
        "hero.stat3" => "متوسط الوقت الموفر",

        "partnerships.title" => "شركاؤنا",
        "partnerships.subtitle" => "مؤسسات تثق في تورّي لخدمة زبائنها بشكل أفضل.",
        "partnerships.viewDetails" => "عرض الشراكة",
        "partnerships.empty" => "شراكات جديدة في الطريق.",

        "aboutPage.backToHome" => "العودة إلى الرئيسية",
        "aboutPage.title" => "عن تورّي",
        "aboutPage.intro" => "تورّي منصة لإدارة طوابير الانتظار صُممت في الجزائر لتعيد للناس الوقت الذي يضيعونه في الانتظار، وتساعد مقدمي الخدمات على استقبالهم في ظروف أفضل.",
        "aboutPage.missionTitle" => "مهمتنا",
        "aboutPage.missionText" => "جعل كل زيارة متوقعة وعادلة وهادئة باستبدال الطابور الفعلي بدور رقمي بسيط.",
        "aboutPage.visionTitle" => "رؤيتنا",
        "aboutPage.visionText" => "بلد لا يضطر فيه أحد لقضاء صباحه واقفاً في طابور لرؤية طبيب أو تجديد وثيقة.",
        "aboutPage.valuesTitle" => "قيمنا",
        "aboutPage.innovationTitle" => "الابتكار",
        "aboutPage.innovationText" => "نبني أدوات حديثة تلائم واقع الميدان ونطورها مع مستخدميها كل يوم.",
        "aboutPage.accessibilityTitle" => "سهولة الوصول",
        "aboutPage.accessibilityText" => "يعمل تورّي على كل الهواتف وبثلاث لغات، ويحتفظ بمكان للتذكرة الورقية.",
        "aboutPage.reliabilityTitle" => "الموثوقية",
        "aboutPage.reliabilityText" => "يعتمد علينا شركاؤنا في أوقات الذروة، والتوفر أولويتنا.",
        "aboutPage.localExpertiseTitle" => "خبرة محلية",
        "aboutPage.localExpertiseText" => "يعرف فريقنا المؤسسات والقوانين والعادات المحلية ويرافق الشركاء في الميدان.",
        "aboutPage.whoWeServeTitle" => "من نخدم",
        "aboutPage.whoWeServeText" => "يتكيف تورّي مع كل مؤسسة تستقبل الجمهور:",
        "aboutPage.service1" => "المستشفيات والعيادات",
        "aboutPage.service2" => "البنوك ووكالات التأمين",
        "aboutPage.service3" => "الإدارات العمومية والبلديات",
        "aboutPage.service4" => "مراكز خدمة الاتصالات والطاقة",
        "aboutPage.service5" => "الجامعات ومراكز التكوين",
        "aboutPage.service6" => "المتاجر وخدمات ما بعد البيع",
        "aboutPage.whyChooseTitle" => "لماذا تورّي",
        "aboutPage.provenTrackLabel" => "نتائج مثبتة:",
        "aboutPage.provenTrackText" => "آلاف المواعيد تمر عبر تورّي كل يوم.",
        "aboutPage.localSupportLabel" => "دعم محلي:",
        "aboutPage.localSupportText" => "فريق يتحدث لغتك ويجيب بسرعة.",
        "aboutPage.complianceLabel" => "المطابقة:",
        "aboutPage.complianceText" => "تُعالج البيانات الشخصية وفق التشريع الوطني.",
        "aboutPage.scalabilityLabel" => "قابلية التوسع:",
        "aboutPage.scalabilityText" => "من مكتب واحد إلى شبكة وطنية من الوكالات.",
        "aboutPage.getInTouchTitle" => "تواصل معنا",
        "aboutPage.getInTouchText" => "هل تريد اعتماد تورّي في مؤسستك؟ يسعدنا التواصل معك.",
        "aboutPage.email" => "البريد: contact@toorrii.com",
        "aboutPage.phone" => "الهاتف: +213 (0) 123 456 789",
        "aboutPage.address" => "العنوان: الجزائر العاصمة، الجزائر",

        "contact.title" => "اتصل بنا",
        "contact.subtitle" => "سؤال، فكرة شراكة أو طلب عرض؟ راسلنا وسنرد عليك بسرعة.",
        "contact.email" => "البريد الإلكتروني",
        "contact.phone" => "الهاتف",
        "contact.location" => "العنوان",
        "contact.hours" => "أوقات العمل",
        "contact.hoursValue" => "الأحد - الخميس، 8:00 - 17:00",
        "contactPage.name" => "الاسم الكامل",
        "contactPage.namePlaceholder" => "اسمك",
        "contactPage.email" => "البريد الإلكتروني",
        "contactPage.emailPlaceholder" => "you@example.com",
        "contactPage.subject" => "الموضوع",
        "contactPage.subjectPlaceholder" => "ما موضوع رسالتك؟",
        "contactPage.message" => "الرسالة",
        "contactPage.messagePlaceholder" => "أخبرنا بالمزيد...",
        "contactPage.submit" => "إرسال الرسالة",
        "contactPage.sending" => "جارٍ الإرسال...",
        "contactPage.successMessage" => "شكراً! تم إرسال رسالتك.",
        "contactPage.errorMessage" => "تعذر إرسال رسالتك. يرجى المحاولة مرة أخرى.",

        "partner.notFound" => "الشريك غير موجود",
        "partner.notFoundDesc" => "الشريك الذي تبحث عنه غير موجود أو لم يعد مدرجاً.",
        "partner.backToPartnerships" => "العودة إلى الشراكات",
        "partner.founded" => "تأسست",
        "partner.headquarters" => "المقر",
        "partner.partnershipSince" => "شريك منذ",
        "partner.visitWebsite" => "زيارة الموقع",
        "partner.aboutTitle" => "عن",
        "partner.aboutQuote" => "مع {name}، نعيد تشكيل طريقة استقبال الزبائن في قطاع {industry}.",
        "partner.collaboration" => "التعاون",
        "partner.collaborationDesc" => "فريق مشترك ينشر تورّي ويضبطه في كل فرع.",
        "partner.innovation" => "الابتكار",
        "partner.innovationDesc" => "تُجرب الميزات الجديدة مع شريكنا قبل تعميمها.",
        "partner.results" => "النتائج",
        "partner.resultsDesc" => "انتظار أقصر، قاعات أهدأ وزبائن أكثر رضا.",
        "partner.galleryTitle" => "معرض الصور",
        "partner.gallerySubtitle" => "لمحة عن الشراكة في الميدان.",
        "partner.featureHighlight" => "في الموقع",
        "partner.readyToPartner" => "هل أنت مستعد للشراكة معنا؟",
        "partner.readyToPartnerDesc" => "انضم إلى المؤسسات التي تعيد لزبائنها وقتهم.",
        "partner.startConversation" => "ابدأ المحادثة",
        "partner.exploreMore" => "اكتشف المؤسسات الأخرى التي تعمل مع تورّي.",
        "partner.viewAllPartners" => "عرض جميع الشركاء",

        "notFound.title" => "الصفحة غير موجودة",
        "notFound.desc" => "الصفحة التي تبحث عنها غير موجودة أو تم نقلها.",
        "notFound.home" => "العودة إلى الرئيسية",

        "toast.dismiss" => "إغلاق",

        _ => return None,
    };
    Some(text)
}
