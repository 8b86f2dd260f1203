//! Haitian Creole translation table.
//!
//! Notice texts added for the form flows are not translated yet and resolve
//! through the English fallback.

pub(super) const TABLE: &[(&str, &str)] = &[
    ("home", "Akèy"),
    ("about", "Sou Nou"),
    ("blog", "Blog"),
    ("dashboard", "Tablo"),
    ("login", "Konekte"),
    ("signup", "Enskri"),
    ("resources", "Resous"),
    ("findTeacher", "Jwenn yon Pwofesè"),
    ("becomeTeacher", "Vin yon Pwofesè"),
    ("logout", "Dekonekte"),
    ("contact", "Kontak"),
    ("welcomeBack", "Byenveni Ankò!"),
    ("continueJourney", "Konekte pou kontinye aprantisaj ou ak LesonPaw"),
    ("email", "Imèl"),
    ("password", "Modpas"),
    ("forgotPassword", "Ou bliye modpas ou?"),
    ("enterEmail", "Antre imèl ou"),
    ("enterPassword", "Antre modpas ou"),
    ("validate", "Valide"),
    ("captchaText", "Antre tèks captcha a"),
    ("newToSite", "Ou nouvo sou LesonPaw?"),
    ("createAccount", "Kreye yon kont"),
    ("successLogin", "Koneksyon reyisi!"),
    ("failedLogin", "Koneksyon echwe"),
    ("tryAgain", "Eseye ankò"),
    ("quickLinks", "Lyen Rapid"),
    ("subjects", "Matyè"),
    ("contactUs", "Kontakte Nou"),
    ("teacherGuide", "Gid Pwofesè"),
    ("studentGuide", "Gid Elèv"),
    ("connectingStudents", "Konekte elèv yo ak pwofesè pwofesyonèl atravè Ayiti depi 2024"),
    ("allRightsReserved", "© 2025 LesonPaw. Tout dwa rezève."),
    ("privacyPolicy", "Politik Konfidansyalite"),
    ("termsOfService", "Kondisyon Sèvis"),
    ("cookies", "Cookies"),
    ("transformingEducation", "Transfòme Edikasyon"),
    ("inHaiti", "an Ayiti"),
    ("buildingBridges", "Debloke potansyèl ou ak pwofesè ekspè ki enspire. Jwenn ak plizyè milye elèv ki gen siksè sou pi bon platfòm aprantisaj Ayiti a. Chemen ou pou ekselans la kòmanse isit la!"),
    ("getStarted", "Kòmanse Kounye a"),
    ("ourPurpose", "Misyon Nou"),
    ("empoweringEducation", "Bay pouvwa edikasyon atravè inovasyon ak aksè"),
    ("forStudents", "Pou Elèv yo"),
    ("forTutors", "Pou Pwofesè yo"),
    ("accessToTutors", "Aksè a pwofesè kalifye nan plizyè matyè"),
    ("flexibleScheduling", "Orè fleksib selon bezwen ou"),
    ("personalizedLearning", "Eksperyans aprantisaj pèsonalize"),
    ("progressTracking", "Swivi pwogrè ak analiz pèfòmans"),
    ("buildProfile", "Bati pwofil ou ak reputasyon ou kòm pwofesè"),
    ("setSchedule", "Fikse pwòp orè ak pri ou"),
    ("teachingResources", "Aksè a resous ak materyèl ansèyman"),
    ("securePayment", "Tretman peman sekirize"),
    ("trustAndSecurity", "Konfyans ak Sekirite"),
    ("yourSafety", "Sekirite ou ak siksè ou se priyorite nou yo"),
    ("verifiedTutors", "Pwofesè Verifye"),
    ("support247", "Sipò 24/7"),
    ("satisfactionGuarantee", "Garanti Satisfaksyon"),
    ("tutorsVerified", "Tout pwofesè nou yo pase pa verifikasyon apwofondi"),
    ("supportAvailable", "Ekip sipò nou an toujou disponib pou ede ou"),
    ("qualityEducation", "Edikasyon Kalite"),
    ("mathematics", "Matematik"),
    ("sciences", "Syans"),
    ("languages", "Lang"),
    ("history", "Istwa"),
    ("computerScience", "Enfòmatik"),
    ("artsMusic", "Art ak Mizik"),
    ("studentsHelped", "Elèv ki Jwenn Èd"),
    ("successfulLearners", "Apranti ki reyisi objektif yo"),
    ("expertTutors", "Pwofesè Ekspè"),
    ("qualifiedEducators", "Edikatè kalifye ki pare pou ede"),
    ("subjectsCovered", "Matyè ki Kouvri"),
    ("diverseTopics", "Divès sijè akademik"),
    ("successRate", "To Siksè"),
    ("satisfactionRate", "To satisfaksyon elèv yo"),
    ("ourValues", "Valè Fondamantal Nou yo"),
    ("principlesGuide", "Prensip ki gide misyon nou pou transfòme edikasyon"),
    ("integrity", "Entegrite"),
    ("integrityDesc", "Nou kenbe pi wo nivo konduit pwofesyonèl"),
    ("innovation", "Aprantisaj Inovatif"),
    ("innovationDesc", "Itilize teknoloji pou rann edikasyon pi aksesib ak pi angajan pou tout moun."),
    ("growth", "Kwasans"),
    ("growthDesc", "Ankouraje aprantisaj ak devlopman kontinyèl"),
    ("excellence", "Ekselans"),
    ("excellenceDesc", "Vize pi bon nan tout sa nou fè"),
    ("readyToTransform", "Ou Pare pou Transfòme Pakou Aprantisaj Ou?"),
    ("joinThousands", "Jwenn ak milye elèv ak pwofesè ki deja fè pati kominote nou an k ap grandi"),
    ("howItWorks", "Kijan Li Mache"),
    ("searchTeacher", "Chèche"),
    ("searchTeacherDesc", "Jwenn pwofesè pafè a selon bezwen ou ak kote ou ye an Ayiti."),
    ("connect", "Konekte"),
    ("connectDesc", "Planifye leson yo selon disponibilite ou."),
    ("learn", "Aprann"),
    ("learnDesc", "Resevwa enstriksyon pèsonalize epi reyalize objektif ou yo."),
    ("platformDesc", "Platfòm nou an fasilite koneksyon ant elèv yo ak pwofesè kalifye an Ayiti"),
    ("readyToStart", "Ou pare pou kòmanse pakou aprantisaj ou oswa ofri sèvis ansèyman ou?"),
    ("whyChooseUs", "Poukisa Chwazi LessonPaw"),
    ("committedToEducation", "Nou angaje nou pou rann edikasyon kalite aksesib atravè Ayiti"),
    ("verifiedTeachers", "Pwofesè Verifye"),
    ("verifiedTeachersDesc", "Tout pwofesè yo verifye pou kalifikasyon ak ekspètiz yo."),
    ("studentCount", "5,000+ Elèv"),
    ("studentCountDesc", "Jwenn ak milye elèv ki deja jwenn pwofesè pafè yo."),
    ("qualityGuarantee", "Garanti Kalite"),
    ("qualityGuaranteeDesc", "Nou garanti ansèyman kalite oswa nou ofri yon ranplasman san frè."),
    ("safePayments", "Peman Sekirize"),
    ("safePaymentsDesc", "Opsyon peman sekirize ki gen ladan mobile money popilè an Ayiti."),
    ("meetExperts", "Rankontre Pwofesè Ekspè Nou yo"),
    ("teacherDesc", "Aprann ak edikatè ki gen eksperyans ki pasyone pou ede elèv yo reyisi"),
    ("successStories", "Istwa Siksè Nou yo"),
    ("successStoriesDesc", "Dekouvri kijan platfòm nou an transfòme eksperyans aprantisaj epi ede elèv yo atenn objektif yo"),
    ("viewAllStories", "Gade Tout Istwa yo"),
    ("noStories", "Pa gen istwa siksè pou afiche pou kounye a."),
    ("support", "Sipò"),
    ("supportDesc", "Bezwen èd? Ekip sipò nou an la pou ou"),
    ("contactSupport", "Kontakte Sipò"),
    ("supportEmail", "Sipò pa Imèl"),
    ("supportPhone", "Sipò pa Telefòn"),
    ("supportChat", "Chat an Dirèk"),
    ("supportHours", "Orè Sipò"),
    ("supportAvailability", "Sipò Disponib 24/7"),
    ("supportResponse", "Tan repons tipik: 2 èdtan"),
    ("supportTicket", "Kreye Tikè Sipò"),
    ("supportFAQ", "FAQ"),
    ("supportHelp", "Need Support?"),
    ("supportTeam", "We are here to Help"),
    ("pleaseEnterMessage", "Tanpri antre yon mesaj"),
    ("sent", "Voye"),
    ("messageSent", "Mesaj voye"),
    ("error", "Erè"),
    ("failedToSendMessage", "Echèk pou voye mesaj la"),
    ("quickResponse", "Repons Rapid"),
    ("writeMessage", "Ekri mesaj ou a isit la..."),
    ("sendMessage", "Voye Mesaj"),
    ("signInToMessage", "Konekte pou voye yon mesaj"),
    ("pleaseLoginMessage", "Tanpri konekte nan kont ou pou voye nou yon mesaj."),
    ("whatIsLesonPaw", "Kisa"),
    ("qualityEducationDesc", "Nou bay aksè a edikasyon kalite siperyè atravè rezo pwofesè pwofesyonèl verifye nou yo."),
    ("connecting", "Bati Koneksyon"),
    ("connectingDesc", "Kreye koneksyon ki gen sans ant elèv ak pwofesè yo pou ankouraje yon anviwònman aprantisaj kolaboratif."),
    ("lesonPawMission", "Misyon nou se transfòme edikasyon an Ayiti lè nou rann aprantisaj kalite aksesib pou tout elèv atravè platfòm inovatif nou an."),
    ("getInTouch", "Kontakte"),
    ("contactSubtitle", "Nou la pou ede w! Voye nou yon mesaj epi nou ap reponn nan 24 èdtan."),
    ("fullName", "Non Konplè"),
    ("nameRequired", "Non an obligatwa"),
    ("emailRequired", "Imèl la obligatwa"),
    ("invalidEmail", "Adrès imèl la pa valid"),
    ("phone", "Nimewo Telefòn"),
    ("optional", "Opsyonèl"),
    ("subject", "Sijè"),
    ("subjectRequired", "Sijè a obligatwa"),
    ("message", "Mesaj"),
    ("messageRequired", "Mesaj la obligatwa"),
    ("messageMinLength", "Mesaj la dwe gen omwen 20 karaktè"),
    ("attachments", "Dokiman"),
    ("fileUploadInfo", "Gwosè maksimòm: 5MB. Fòma ki aksepte: PDF, DOC, DOCX, JPG, PNG"),
    ("verifyCaptcha", "Verifye Captcha"),
    ("enterCaptcha", "Antre tèks captcha a"),
    ("captchaValidated", "Captcha Verifye!"),
    ("captchaRequired", "Captcha Obligatwa"),
    ("pleaseVerifyCaptcha", "Tanpri verifye captcha a anvan ou soumèt"),
    ("sending", "Ap voye..."),
    ("responseTime", "Nou ap reponn ou nan 24 èdtan."),
    ("submissionFailed", "Echèk nan Voye"),
    ("tryAlternativeContact", "Tanpri eseye pita oswa itilize lòt metòd pou kontakte nou."),
    ("businessHours", "Orè Biznis"),
    ("mondayFriday", "Lendi - Vandredi"),
    ("saturday", "Samdi"),
    ("sunday", "Dimanch"),
    ("closed", "Fèmen"),
    ("timeZone", "Tout lè yo se nan Lè Lès (ET)"),
    ("contactInfo", "Enfòmasyon Kontak"),
    ("address", "Adrès"),
    ("connectWithUs", "Konekte ak Nou"),
    ("ourLocation", "Lokalizasyon Nou"),
    ("getDirections", "Jwenn Direksyon"),
    ("manageProfile", "Jere Pwofil"),
    ("myBookings", "Rezèvasyon Mwen"),
    ("joinAsTeacher", "Vin yon Pwofesè"),
    ("postJob", "Poste Travay"),
    ("availableJobs", "Travay Disponib"),
    ("manageServices", "Jere Sèvis"),
    ("manageUsers", "Jere Itilizatè"),
    ("allTutors", "Tout Pwofesè"),
    ("showMessages", "Montre Mesaj"),
    ("addTutor", "Ajoute Pwofesè"),
    ("applications", "Aplikasyon"),
    ("payments", "Peman"),
    ("analytics", "Analiz"),
    ("students", "Elèv"),
    ("allJobs", "Tout Travay"),
    ("allServices", "Tout Sèvis"),
    ("story", "Istwa"),
    ("manageStory", "Jere Istwa"),
    ("addBlog", "Ajoute Blog"),
    ("editBlog", "Modifye Blog"),
    ("menu", "Meni"),
];
