//! French translation table.

pub(super) const TABLE: &[(&str, &str)] = &[
    ("home", "Accueil"),
    ("about", "À Propos"),
    ("blog", "Blogs"),
    ("dashboard", "Tableau de Bord"),
    ("login", "Connexion"),
    ("signup", "S'inscrire"),
    ("resources", "Ressources"),
    ("findTeacher", "Trouver un Professeur"),
    ("becomeTeacher", "Devenir Professeur"),
    ("logout", "Déconnexion"),
    ("contact", "Contact"),
    ("welcomeBack", "Bon Retour!"),
    ("continueJourney", "Connectez-vous pour continuer votre parcours avec LesonPaw"),
    ("email", "Email"),
    ("password", "Mot de passe"),
    ("forgotPassword", "Mot de passe oublié?"),
    ("enterEmail", "Entrez votre email"),
    ("enterPassword", "Entrez votre mot de passe"),
    ("validate", "Valider"),
    ("captchaText", "Entrez le texte du captcha"),
    ("newToSite", "Nouveau sur LesonPaw?"),
    ("createAccount", "Créer un compte"),
    ("successLogin", "Connexion réussie!"),
    ("failedLogin", "Échec de la connexion"),
    ("tryAgain", "Réessayer"),
    ("quickLinks", "Liens Rapides"),
    ("subjects", "Matières"),
    ("contactUs", "Contactez-nous"),
    ("teacherGuide", "Guide du Professeur"),
    ("studentGuide", "Guide de l'Étudiant"),
    ("connectingStudents", "Connecter les étudiants avec des professeurs professionnels à travers Haïti depuis 2024"),
    ("allRightsReserved", "© 2025 LesonPaw. Tous droits réservés."),
    ("privacyPolicy", "Politique de Confidentialité"),
    ("termsOfService", "Conditions d'Utilisation"),
    ("cookies", "Cookies"),
    ("transformingEducation", "Transformer l'Éducation"),
    ("inHaiti", "en Haïti"),
    ("buildingBridges", "Libérez votre potentiel avec des éducateurs experts qui inspirent. Rejoignez des milliers d'étudiants qui réussissent sur la première plateforme d'apprentissage d'Haïti. Votre chemin vers l'excellence commence ici !"),
    ("getStarted", "Commencer Maintenant"),
    ("ourPurpose", "Notre Mission"),
    ("empoweringEducation", "L'autonomisation de l'éducation par l'innovation et l'accessibilité"),
    ("forStudents", "Pour les Étudiants"),
    ("forTutors", "Pour les Professeurs"),
    ("accessToTutors", "Accès à des tuteurs qualifiés dans plusieurs matières"),
    ("flexibleScheduling", "Planification flexible selon vos besoins"),
    ("personalizedLearning", "Expérience d'apprentissage personnalisée"),
    ("progressTracking", "Suivi des progrès et analyses de performance"),
    ("buildProfile", "Construisez votre profil et réputation d'enseignant"),
    ("setSchedule", "Définissez vos horaires et tarifs"),
    ("teachingResources", "Accès aux ressources et matériels d'enseignement"),
    ("securePayment", "Traitement sécurisé des paiements"),
    ("trustAndSecurity", "Confiance et Sécurité"),
    ("yourSafety", "Votre sécurité et votre réussite sont nos principales priorités"),
    ("verifiedTutors", "Tuteurs Vérifiés"),
    ("support247", "Support 24/7"),
    ("satisfactionGuarantee", "Garantie de Satisfaction"),
    ("tutorsVerified", "Tous nos tuteurs passent par des vérifications approfondies"),
    ("supportAvailable", "Notre équipe de support est toujours disponible pour vous aider"),
    ("qualityEducation", "Éducation de Qualité"),
    ("mathematics", "Mathématiques"),
    ("sciences", "Sciences"),
    ("languages", "Langues"),
    ("history", "Histoire"),
    ("computerScience", "Informatique"),
    ("artsMusic", "Arts et Musique"),
    ("studentsHelped", "Étudiants Aidés"),
    ("successfulLearners", "Apprenants qui ont atteint leurs objectifs"),
    ("expertTutors", "Tuteurs Experts"),
    ("qualifiedEducators", "Éducateurs qualifiés prêts à aider"),
    ("subjectsCovered", "Matières Couvertes"),
    ("diverseTopics", "Large gamme de sujets académiques"),
    ("successRate", "Taux de Réussite"),
    ("satisfactionRate", "Taux de satisfaction des étudiants"),
    ("ourValues", "Nos Valeurs Fondamentales"),
    ("principlesGuide", "Les principes qui guident notre mission de transformer l'éducation"),
    ("integrity", "Intégrité"),
    ("integrityDesc", "Nous maintenons les plus hauts standards de conduite professionnelle"),
    ("innovation", "Apprentissage Innovant"),
    ("innovationDesc", "Utiliser la technologie pour rendre l'éducation plus accessible et engageante pour tous."),
    ("growth", "Croissance"),
    ("growthDesc", "Favoriser l'apprentissage et le développement continus"),
    ("excellence", "Excellence"),
    ("excellenceDesc", "Viser l'excellence dans tout ce que nous faisons"),
    ("readyToTransform", "Prêt à Transformer Votre Parcours d'Apprentissage ?"),
    ("joinThousands", "Rejoignez des milliers d'étudiants et de tuteurs qui font déjà partie de notre communauté grandissante"),
    ("howItWorks", "Comment Ça Marche"),
    ("searchTeacher", "Rechercher"),
    ("searchTeacherDesc", "Trouvez le professeur idéal selon vos besoins et votre localisation en Haïti."),
    ("connect", "Connecter"),
    ("connectDesc", "Planifiez des leçons selon votre disponibilité."),
    ("learn", "Apprendre"),
    ("learnDesc", "Recevez une instruction personnalisée et atteignez vos objectifs."),
    ("platformDesc", "Notre plateforme facilite la connexion entre étudiants et professeurs qualifiés en Haïti"),
    ("readyToStart", "Prêt à commencer votre parcours d'apprentissage ou à offrir vos services d'enseignement ?"),
    ("whyChooseUs", "Pourquoi Choisir LessonPaw"),
    ("committedToEducation", "Nous nous engageons à rendre l'éducation de qualité accessible à travers Haïti"),
    ("verifiedTeachers", "Professeurs Vérifiés"),
    ("verifiedTeachersDesc", "Tous nos professeurs sont vérifiés pour leurs qualifications et expertise."),
    ("studentCount", "5,000+ Étudiants"),
    ("studentCountDesc", "Rejoignez des milliers d'étudiants qui ont trouvé leur professeur idéal."),
    ("qualityGuarantee", "Garantie Qualité"),
    ("qualityGuaranteeDesc", "Nous garantissons un enseignement de qualité ou proposons un remplacement sans frais."),
    ("safePayments", "Paiements Sécurisés"),
    ("safePaymentsDesc", "Options de paiement sécurisées incluant le mobile money populaire en Haïti."),
    ("meetExperts", "Rencontrez Nos Professeurs Experts"),
    ("teacherDesc", "Apprenez avec des éducateurs expérimentés passionnés par la réussite des étudiants"),
    ("successStories", "Nos Histoires de Réussite"),
    ("successStoriesDesc", "Découvrez comment notre plateforme a transformé les expériences d'apprentissage et aidé les étudiants à atteindre leurs objectifs"),
    ("viewAllStories", "Voir Toutes les Histoires"),
    ("noStories", "Aucune histoire de réussite à afficher pour le moment."),
    ("support", "Support"),
    ("supportDesc", "Besoin d'aide ? Notre équipe de support est là pour vous"),
    ("contactSupport", "Contacter le Support"),
    ("supportEmail", "Support par Email"),
    ("supportPhone", "Support Téléphonique"),
    ("supportChat", "Chat en Direct"),
    ("supportHours", "Heures de Support"),
    ("supportAvailability", "Support Disponible 24/7"),
    ("supportResponse", "Temps de réponse typique : 2 heures"),
    ("supportTicket", "Créer un Ticket de Support"),
    ("supportFAQ", "FAQ"),
    ("supportHelp", "Comment pouvons-nous vous aider ?"),
    ("supportTeam", "Notre Équipe de Support"),
    ("pleaseEnterMessage", "Veuillez entrer un message"),
    ("sent", "Envoyé"),
    ("messageSent", "Message envoyé"),
    ("error", "Erreur"),
    ("failedToSendMessage", "Échec de l'envoi du message"),
    ("quickResponse", "Réponse Rapide"),
    ("writeMessage", "Écrivez votre message ici..."),
    ("sendMessage", "Envoyer le Message"),
    ("signInToMessage", "Connectez-vous pour envoyer un message"),
    ("pleaseLoginMessage", "Veuillez vous connecter à votre compte pour nous envoyer un message."),
    ("whatIsLesonPaw", "Qu'est-ce que"),
    ("qualityEducationDesc", "Nous fournissons un accès à une éducation de haute qualité grâce à notre réseau de professeurs professionnels vérifiés."),
    ("connecting", "Créer des Connexions"),
    ("connectingDesc", "Créer des connexions significatives entre les étudiants et les professeurs pour favoriser un environnement d'apprentissage collaboratif."),
    ("lesonPawMission", "Notre mission est de transformer l'éducation en Haïti en rendant l'apprentissage de qualité accessible à tous les étudiants grâce à notre plateforme innovante."),
    ("getInTouch", "Contactez"),
    ("contactSubtitle", "Nous sommes là pour vous aider ! Envoyez-nous un message et nous répondrons dans les 24 heures ouvrables."),
    ("fullName", "Nom Complet"),
    ("nameRequired", "Le nom est requis"),
    ("emailRequired", "L'email est requis"),
    ("invalidEmail", "Adresse email invalide"),
    ("phone", "Numéro de Téléphone"),
    ("optional", "Optionnel"),
    ("subject", "Sujet"),
    ("subjectRequired", "Le sujet est requis"),
    ("message", "Message"),
    ("messageRequired", "Le message est requis"),
    ("messageMinLength", "Le message doit contenir au moins 20 caractères"),
    ("attachments", "Pièces Jointes"),
    ("fileUploadInfo", "Taille maximale : 5MB. Formats supportés : PDF, DOC, DOCX, JPG, PNG"),
    ("verifyCaptcha", "Vérifier le Captcha"),
    ("enterCaptcha", "Entrez le texte du captcha"),
    ("captchaValidated", "Captcha Validé !"),
    ("captchaRequired", "Captcha Requis"),
    ("pleaseVerifyCaptcha", "Veuillez vérifier le captcha avant de soumettre"),
    ("sending", "Ap voye..."),
    ("responseTime", "Nous ap reponn ou nan 24 èdtan."),
    ("submissionFailed", "Echèk nan Voye"),
    ("tryAlternativeContact", "Veuillez réessayer plus tard ou utiliser d'autres méthodes pour kontakte nou."),
    ("businessHours", "Heures d'Ouverture"),
    ("mondayFriday", "Lundi - Vendredi"),
    ("saturday", "Samedi"),
    ("sunday", "Dimanche"),
    ("closed", "Fèmen"),
    ("timeZone", "Tout lè yo se nan Lè Lès (ET)"),
    ("contactInfo", "Enfòmasyon Kontak"),
    ("address", "Adrès"),
    ("connectWithUs", "Konekte ak Nou"),
    ("ourLocation", "Lokalizasyon Nou"),
    ("getDirections", "Jwenn Direksyon"),
    ("manageProfile", "Gérer le Profil"),
    ("myBookings", "Mes Réservations"),
    ("joinAsTeacher", "Devenir Professeur"),
    ("postJob", "Publier une Offre"),
    ("availableJobs", "Offres Disponibles"),
    ("manageServices", "Gérer les Services"),
    ("manageUsers", "Gérer les Utilisateurs"),
    ("allTutors", "Tous les Tuteurs"),
    ("showMessages", "Afficher les Messages"),
    ("addTutor", "Ajouter un Tuteur"),
    ("applications", "Candidatures"),
    ("payments", "Paiements"),
    ("analytics", "Analyses"),
    ("students", "Étudiants"),
    ("allJobs", "Toutes les Offres"),
    ("allServices", "Tous les Services"),
    ("story", "Histoire"),
    ("manageStory", "Gérer l'Histoire"),
    ("addBlog", "Ajouter un Blog"),
    ("editBlog", "Éditer le Blog"),
    ("menu", "Meni"),
    ("invalidCaptcha", "Captcha invalide"),
    ("pleaseTryAgain", "Veuillez réessayer"),
    ("ok", "D'accord"),
    ("termsRequired", "Conditions Générales Requises"),
    ("acceptTerms", "Veuillez accepter les conditions générales pour continuer"),
    ("loggedOut", "Déconnecté"),
    ("loggedOutText", "Vous vous êtes déconnecté avec succès."),
    ("logoutFailed", "Échec de la déconnexion"),
    ("logoutFailedText", "Un problème est survenu lors de la déconnexion."),
    ("passwordRequired", "Le mot de passe est requis"),
    ("passwordMinLength", "Le mot de passe doit contenir au moins 6 caractères"),
    ("passwordPattern", "Le mot de passe doit inclure une majuscule, une minuscule, un chiffre et un caractère spécial"),
    ("imageUploadFailed", "Échec du téléversement de l'image"),
    ("imageUploadFailedText", "Veuillez réessayer ou utiliser une URL de photo."),
    ("userCreated", "Utilisateur créé avec succès"),
    ("signupFailed", "Échec de l'inscription"),
    ("loginToBook", "Veuillez vous connecter pour réserver un tuteur."),
    ("alreadyBooked", "Vous avez déjà réservé ce tuteur."),
    ("bookingSuccess", "Tuteur réservé avec succès !"),
    ("bookingFailed", "Échec de la réservation du tuteur."),
    ("tutorNotFound", "Tuteur introuvable"),
    ("failedToLoadTutor", "Impossible de charger les détails du tuteur"),
    ("paymentSuccess", "Paiement réussi !"),
    ("bookingConfirmed", "Votre réservation a été confirmée."),
    ("paymentUnexpectedError", "Une erreur inattendue s'est produite. Veuillez réessayer."),
    ("paymentNotReady", "Le paiement n'est pas encore prêt. Veuillez patienter."),
    ("paymentNotCompleted", "Le paiement n'a pas abouti. Veuillez réessayer."),
    ("paymentAlreadyCompleted", "Cette réservation a déjà été payée."),
    ("success", "Succès"),
    ("jobPosted", "Offre publiée avec succès !"),
    ("jobPostFailed", "Échec de la publication de l'offre"),
    ("paymentRequired", "Paiement requis"),
    ("jobFeeNotice", "Vous avez publié 3 offres. Veuillez payer des frais de $10 pour continuer."),
    ("payFee", "Payer $10"),
    ("messageMarkedRead", "Message marqué comme lu"),
    ("messageDeleted", "Message supprimé"),
    ("deleteMessageConfirm", "Supprimer le message ?"),
    ("failedToLoadMessages", "Impossible de charger les messages"),
    ("failedToLoadBlogs", "Impossible de charger les blogs. Veuillez réessayer plus tard."),
];
