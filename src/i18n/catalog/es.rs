//! Spanish translation table.

pub(super) const TABLE: &[(&str, &str)] = &[
    ("home", "Inicio"),
    ("about", "Sobre Nosotros"),
    ("blog", "Blogs"),
    ("dashboard", "Panel de Control"),
    ("login", "Iniciar Sesión"),
    ("signup", "Registrarse"),
    ("resources", "Recursos"),
    ("findTeacher", "Encontrar Profesor"),
    ("becomeTeacher", "Conviértete en Profesor"),
    ("logout", "Cerrar Sesión"),
    ("contact", "Contacto"),
    ("welcomeBack", "¡Bienvenido de Nuevo!"),
    ("continueJourney", "Inicia sesión para continuar tu viaje de aprendizaje con LesonPaw"),
    ("email", "Correo Electrónico"),
    ("password", "Contraseña"),
    ("forgotPassword", "¿Olvidaste tu contraseña?"),
    ("enterEmail", "Ingresa tu correo electrónico"),
    ("enterPassword", "Ingresa tu contraseña"),
    ("validate", "Validar"),
    ("captchaText", "Ingresa el texto del captcha"),
    ("newToSite", "¿Nuevo en LesonPaw?"),
    ("createAccount", "Crear una cuenta"),
    ("successLogin", "¡Inicio de sesión exitoso!"),
    ("failedLogin", "Error al iniciar sesión"),
    ("tryAgain", "Intentar de nuevo"),
    ("quickLinks", "Enlaces Rápidos"),
    ("subjects", "Materias"),
    ("contactUs", "Contáctanos"),
    ("teacherGuide", "Guía del Profesor"),
    ("studentGuide", "Guía del Estudiante"),
    ("connectingStudents", "Conectando estudiantes con profesores profesionales en Haití desde 2024"),
    ("allRightsReserved", "© 2025 LesonPaw. Todos los derechos reservados."),
    ("privacyPolicy", "Política de Privacidad"),
    ("termsOfService", "Términos de Servicio"),
    ("cookies", "Cookies"),
    ("transformingEducation", "Transformando la Educación"),
    ("inHaiti", "en Haití"),
    ("buildingBridges", "¡Desbloquea tu potencial con educadores expertos que inspiran. Únete a miles de estudiantes exitosos en la principal plataforma de aprendizaje de Haití. Tu camino hacia la excelencia comienza aquí!"),
    ("getStarted", "Comenzar Ahora"),
    ("ourPurpose", "Nuestro Propósito"),
    ("empoweringEducation", "Empoderando la educación a través de la innovación y la accesibilidad"),
    ("forStudents", "Para Estudiantes"),
    ("forTutors", "Para Profesores"),
    ("accessToTutors", "Acceso a tutores calificados en múltiples materias"),
    ("flexibleScheduling", "Programación flexible según tus necesidades"),
    ("personalizedLearning", "Experiencia de aprendizaje personalizada"),
    ("progressTracking", "Seguimiento de progreso y análisis de rendimiento"),
    ("buildProfile", "Construye tu perfil y reputación como profesor"),
    ("setSchedule", "Establece tu propio horario y tarifas"),
    ("teachingResources", "Acceso a recursos y materiales de enseñanza"),
    ("securePayment", "Procesamiento seguro de pagos"),
    ("trustAndSecurity", "Confianza y Seguridad"),
    ("yourSafety", "Tu seguridad y éxito son nuestras principales prioridades"),
    ("verifiedTutors", "Tutores Verificados"),
    ("support247", "Soporte 24/7"),
    ("satisfactionGuarantee", "Garantía de Satisfacción"),
    ("tutorsVerified", "Todos nuestros tutores pasan por verificaciones exhaustivas"),
    ("supportAvailable", "Nuestro equipo de soporte está siempre disponible para ayudarte"),
    ("qualityEducation", "Educación de Calidad"),
    ("qualityEducationDesc", "Proporcionamos acceso a educación de alta calidad a través de nuestra red de profesores profesionales verificados."),
    ("mathematics", "Matemáticas"),
    ("sciences", "Ciencias"),
    ("languages", "Idiomas"),
    ("history", "Historia"),
    ("computerScience", "Informática"),
    ("artsMusic", "Arte y Música"),
    ("studentsHelped", "Estudiantes Ayudados"),
    ("successfulLearners", "Aprendices que lograron sus objetivos"),
    ("expertTutors", "Profesores Expertos"),
    ("qualifiedEducators", "Educadores Calificados Listos para Ayudar"),
    ("subjectsCovered", "Materias Cubiertas"),
    ("diverseTopics", "Amplia Gama de Temas Académicos"),
    ("successRate", "Tasa de Éxito"),
    ("satisfactionRate", "Tasa de Satisfacción del Estudiante"),
    ("ourValues", "Valores Fundamentales Nuestros"),
    ("principlesGuide", "Principios que Guían Nuestra Misión para Transformar la Educación"),
    ("integrity", "Integridad"),
    ("integrityDesc", "Mantenemos los más altos Estándares de Conducta Profesional"),
    ("innovation", "Aprendizaje Innovador"),
    ("innovationDesc", "Aprovechando la tecnología para hacer la educación más accesible y atractiva para todos."),
    ("growth", "Crecimiento"),
    ("growthDesc", "Fomentar el Aprendizaje y Desarrollo Continuo"),
    ("excellence", "Excelencia"),
    ("excellenceDesc", "Buscar la Excelencia en Todo lo Que Hacemos"),
    ("readyToTransform", "¿Listo para Transformar Tu Viaje de Aprendizaje?"),
    ("joinThousands", "Únete a miles de estudiantes y tutores que ya forman parte de nuestra comunidad en crecimiento"),
    ("howItWorks", "¿Cómo Funciona?"),
    ("searchTeacher", "Buscar"),
    ("searchTeacherDesc", "Encuentra el profesor ideal según sus necesidades y ubicación en Haití."),
    ("connect", "Conectarse"),
    ("connectDesc", "Planifique las lecciones según su disponibilité."),
    ("learn", "Aprender"),
    ("learnDesc", "Reciba instrucción personalizada y logre sus objetivos."),
    ("platformDesc", "Nuestra plataforma facilita la conexión entre estudiantes y profesores calificados en Haití"),
    ("readyToStart", "¿Listo para comenzar su viaje de aprendizaje o ofrecer sus servicios de enseñanza?"),
    ("whyChooseUs", "¿Por Qué Elegir LessonPaw?"),
    ("committedToEducation", "Nos comprometemos a hacer la educación de calidad accesible a través de Haití"),
    ("verifiedTeachers", "Profesores Verificados"),
    ("verifiedTeachersDesc", "Todos nuestros profesores están verificados para su calificación y expertise."),
    ("studentCount", "5,000+ Estudiantes"),
    ("studentCountDesc", "Únete a miles de estudiantes que ya encontraron su profesor ideal."),
    ("qualityGuarantee", "Garantía de Calidad"),
    ("qualityGuaranteeDesc", "Nos comprometemos a ofrecer enseñanza de calidad o proponer una sustitución sin cargo."),
    ("safePayments", "Pagos Seguros"),
    ("safePaymentsDesc", "Opciones de pago seguro que incluyen el dinero móvil popular en Haití."),
    ("meetExperts", "Conoce a Nuestros Profesores Expertos"),
    ("teacherDesc", "Aprenda con educadores experimentados apasionados por ayudar a los estudiantes a lograr"),
    ("successStories", "Nuestras Historias de Éxito"),
    ("successStoriesDesc", "Descubre cómo nuestra plataforma ha transformado experiencias de aprendizaje y ayudado a estudiantes a alcanzar sus metas"),
    ("viewAllStories", "Ver Todas las Historias"),
    ("noStories", "No hay historias de éxito para mostrar por el momento."),
    ("support", "Soporte"),
    ("supportDesc", "¿Necesitas ayuda? Nuestro equipo de soporte está aquí para ti"),
    ("contactSupport", "Contactar Soporte"),
    ("supportEmail", "Soporte por Email"),
    ("supportPhone", "Soporte Telefónico"),
    ("supportChat", "Chat en Vivo"),
    ("supportHours", "Horario de Soporte"),
    ("supportAvailability", "Soporte Disponible 24/7"),
    ("supportResponse", "Tiempo de respuesta típico: 2 horas"),
    ("supportTicket", "Crear Ticket de Soporte"),
    ("supportFAQ", "Preguntas Frecuentes"),
    ("supportHelp", "¿Cómo podemos ayudarte?"),
    ("supportTeam", "Nuestro Equipo de Soporte"),
    ("pleaseEnterMessage", "Por favor, ingrese un mensaje"),
    ("sent", "Enviado"),
    ("messageSent", "Mensaje enviado"),
    ("error", "Error"),
    ("failedToSendMessage", "Error al enviar el mensaje"),
    ("quickResponse", "Respuesta Rápida"),
    ("writeMessage", "Escribe tu mensaje aquí..."),
    ("sendMessage", "Enviar Mensaje"),
    ("signInToMessage", "Inicia sesión para enviar un mensaje"),
    ("pleaseLoginMessage", "Por favor, inicia sesión en tu cuenta para enviarnos un mensaje."),
    ("whatIsLesonPaw", "¿Qué es"),
    ("connecting", "Construyendo Conexiones"),
    ("connectingDesc", "Creando conexiones significativas entre estudiantes y profesores para fomentar un ambiente de aprendizaje colaborativo."),
    ("lesonPawMission", "Nuestra misión es transformar la educación en Haití haciendo que el aprendizaje de calidad sea accesible para todos los estudiantes a través de nuestra plataforma innovadora."),
    ("getInTouch", "Contacta con"),
    ("contactSubtitle", "¡Estamos aquí para ayudar! Envíanos un mensaje y responderemos dentro de las 24 horas hábiles."),
    ("fullName", "Nombre Completo"),
    ("nameRequired", "El nombre es requerido"),
    ("emailRequired", "El correo electrónico es requerido"),
    ("invalidEmail", "Dirección de correo electrónico inválida"),
    ("phone", "Número de Teléfono"),
    ("optional", "Opcional"),
    ("subject", "Asunto"),
    ("subjectRequired", "El asunto es requerido"),
    ("message", "Mensaje"),
    ("messageRequired", "El mensaje es requerido"),
    ("messageMinLength", "El mensaje debe tener al menos 20 caracteres"),
    ("attachments", "Archivos Adjuntos"),
    ("fileUploadInfo", "Tamaño máximo: 5MB. Formatos soportados: PDF, DOC, DOCX, JPG, PNG"),
    ("verifyCaptcha", "Verificar Captcha"),
    ("enterCaptcha", "Ingrese el texto del captcha"),
    ("captchaValidated", "¡Captcha Validado!"),
    ("captchaRequired", "Captcha Requerido"),
    ("pleaseVerifyCaptcha", "Por favor, verifica el captcha antes de enviar"),
    ("sending", "Enviando..."),
    ("responseTime", "Te responderemos dentro de las 24 horas hábiles."),
    ("submissionFailed", "Error al Enviar"),
    ("tryAlternativeContact", "Por favor, intenta más tarde o usa métodos alternativos de contacto."),
    ("businessHours", "Horario de Atención"),
    ("mondayFriday", "Lunes - Viernes"),
    ("saturday", "Sábado"),
    ("sunday", "Domingo"),
    ("closed", "Cerrado"),
    ("timeZone", "Todos los horarios están en Hora del Este (ET)"),
    ("contactInfo", "Información de Contacto"),
    ("address", "Dirección"),
    ("connectWithUs", "Conéctate con Nosotros"),
    ("ourLocation", "Nuestra Ubicación"),
    ("getDirections", "Obtenir Direksyon"),
    ("manageProfile", "Gestionar Perfil"),
    ("myBookings", "Mis Reservas"),
    ("joinAsTeacher", "Unirse como Profesor"),
    ("postJob", "Publicar Trabajo"),
    ("availableJobs", "Trabajos Disponibles"),
    ("manageServices", "Gestionar Servicios"),
    ("manageUsers", "Gestionar Usuarios"),
    ("allTutors", "Todos los Tutores"),
    ("showMessages", "Mostrar Mensajes"),
    ("addTutor", "Añadir Tutor"),
    ("applications", "Solicitudes"),
    ("payments", "Pagos"),
    ("analytics", "Análisis"),
    ("students", "Estudiantes"),
    ("allJobs", "Todos los Trabajos"),
    ("allServices", "Todos los Servicios"),
    ("story", "Historia"),
    ("manageStory", "Gestionar Historia"),
    ("addBlog", "Añadir Blog"),
    ("editBlog", "Editar Blog"),
    ("menu", "Menú"),
    ("invalidCaptcha", "Captcha inválido"),
    ("pleaseTryAgain", "Por favor, inténtalo de nuevo"),
    ("ok", "Aceptar"),
    ("termsRequired", "Se requieren Términos y Condiciones"),
    ("acceptTerms", "Acepta los términos y condiciones para continuar"),
    ("loggedOut", "Sesión cerrada"),
    ("loggedOutText", "Has cerrado sesión correctamente."),
    ("logoutFailed", "Error al cerrar sesión"),
    ("logoutFailedText", "Algo salió mal al cerrar sesión."),
    ("passwordRequired", "La contraseña es obligatoria"),
    ("passwordMinLength", "La contraseña debe tener al menos 6 caracteres"),
    ("passwordPattern", "La contraseña debe incluir mayúscula, minúscula, número y carácter especial"),
    ("imageUploadFailed", "Error al subir la imagen"),
    ("imageUploadFailedText", "Inténtalo de nuevo o usa una URL de foto."),
    ("userCreated", "Usuario creado con éxito"),
    ("signupFailed", "Error en el registro"),
    ("loginToBook", "Inicia sesión para reservar un tutor."),
    ("alreadyBooked", "Ya has reservado a este tutor."),
    ("bookingSuccess", "¡Tutor reservado con éxito!"),
    ("bookingFailed", "No se pudo reservar el tutor."),
    ("tutorNotFound", "Tutor no encontrado"),
    ("failedToLoadTutor", "No se pudieron cargar los datos del tutor"),
    ("paymentSuccess", "¡Pago exitoso!"),
    ("bookingConfirmed", "Tu reserva ha sido confirmada."),
    ("paymentUnexpectedError", "Ocurrió un error inesperado. Inténtalo de nuevo."),
    ("paymentNotReady", "El pago aún no está listo. Espera un momento."),
    ("paymentNotCompleted", "El pago no se completó. Inténtalo de nuevo."),
    ("paymentAlreadyCompleted", "Esta reserva ya ha sido pagada."),
    ("success", "Éxito"),
    ("jobPosted", "¡Trabajo publicado con éxito!"),
    ("jobPostFailed", "No se pudo publicar el trabajo"),
    ("paymentRequired", "Pago requerido"),
    ("jobFeeNotice", "Has publicado 3 trabajos. Paga una tarifa de $10 para continuar."),
    ("payFee", "Pagar $10"),
    ("messageMarkedRead", "Mensaje marcado como leído"),
    ("messageDeleted", "Mensaje eliminado"),
    ("deleteMessageConfirm", "¿Eliminar mensaje?"),
    ("failedToLoadMessages", "No se pudieron cargar los mensajes"),
    ("failedToLoadBlogs", "No se pudieron cargar los blogs. Inténtalo más tarde."),
];
