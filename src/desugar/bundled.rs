// Library desugaring surface bundled for projects without build metadata, in byte order.
// Classes listed without members are covered in full.

pub const BUNDLED_LIBRARY_DESUGARING: &[&str] = &[
    "java/lang/Iterable#forEach(Ljava/util/function/Consumer;)V",
    "java/lang/Iterable#spliterator()Ljava/util/Spliterator;",
    "java/time/Clock",
    "java/time/DateTimeException",
    "java/time/DayOfWeek",
    "java/time/Duration",
    "java/time/Instant",
    "java/time/LocalDate",
    "java/time/LocalDateTime",
    "java/time/LocalTime",
    "java/time/Month",
    "java/time/MonthDay",
    "java/time/OffsetDateTime",
    "java/time/OffsetTime",
    "java/time/Period",
    "java/time/Year",
    "java/time/YearMonth",
    "java/time/ZoneId",
    "java/time/ZoneOffset",
    "java/time/ZonedDateTime",
    "java/time/chrono/ChronoLocalDate",
    "java/time/format/DateTimeFormatter",
    "java/time/format/DateTimeFormatterBuilder",
    "java/time/format/DateTimeParseException",
    "java/time/format/FormatStyle",
    "java/time/temporal/ChronoField",
    "java/time/temporal/ChronoUnit",
    "java/time/temporal/Temporal",
    "java/time/temporal/TemporalAdjusters",
    "java/time/temporal/TemporalUnit",
    "java/util/ArrayList#forEach(Ljava/util/function/Consumer;)V",
    "java/util/ArrayList#removeIf(Ljava/util/function/Predicate;)Z",
    "java/util/ArrayList#spliterator()Ljava/util/Spliterator;",
    "java/util/Arrays#spliterator([Ljava/lang/Object;)Ljava/util/Spliterator;",
    "java/util/Arrays#stream([D)Ljava/util/stream/DoubleStream;",
    "java/util/Arrays#stream([I)Ljava/util/stream/IntStream;",
    "java/util/Arrays#stream([J)Ljava/util/stream/LongStream;",
    "java/util/Arrays#stream([Ljava/lang/Object;)Ljava/util/stream/Stream;",
    "java/util/Calendar#toInstant()Ljava/time/Instant;",
    "java/util/Collection#removeIf(Ljava/util/function/Predicate;)Z",
    "java/util/Collection#spliterator()Ljava/util/Spliterator;",
    "java/util/Collection#stream()Ljava/util/stream/Stream;",
    "java/util/Comparator#comparing(Ljava/util/function/Function;)Ljava/util/Comparator;",
    "java/util/Comparator#comparingInt(Ljava/util/function/ToIntFunction;)Ljava/util/Comparator;",
    "java/util/Comparator#comparingLong(Ljava/util/function/ToLongFunction;)Ljava/util/Comparator;",
    "java/util/Comparator#naturalOrder()Ljava/util/Comparator;",
    "java/util/Comparator#reversed()Ljava/util/Comparator;",
    "java/util/Comparator#thenComparing(Ljava/util/Comparator;)Ljava/util/Comparator;",
    "java/util/Date#from(Ljava/time/Instant;)Ljava/util/Date;",
    "java/util/Date#toInstant()Ljava/time/Instant;",
    "java/util/DoubleSummaryStatistics",
    "java/util/GregorianCalendar#from(Ljava/time/ZonedDateTime;)Ljava/util/GregorianCalendar;",
    "java/util/GregorianCalendar#toZonedDateTime()Ljava/time/ZonedDateTime;",
    "java/util/IntSummaryStatistics",
    "java/util/Iterator#forEachRemaining(Ljava/util/function/Consumer;)V",
    "java/util/LinkedHashSet#spliterator()Ljava/util/Spliterator;",
    "java/util/List#replaceAll(Ljava/util/function/UnaryOperator;)V",
    "java/util/List#sort(Ljava/util/Comparator;)V",
    "java/util/LongSummaryStatistics",
    "java/util/Map#compute(Ljava/lang/Object;Ljava/util/function/BiFunction;)Ljava/lang/Object;",
    "java/util/Map#computeIfAbsent(Ljava/lang/Object;Ljava/util/function/Function;)Ljava/lang/Object;",
    "java/util/Map#computeIfPresent(Ljava/lang/Object;Ljava/util/function/BiFunction;)Ljava/lang/Object;",
    "java/util/Map#forEach(Ljava/util/function/BiConsumer;)V",
    "java/util/Map#getOrDefault(Ljava/lang/Object;Ljava/lang/Object;)Ljava/lang/Object;",
    "java/util/Map#merge(Ljava/lang/Object;Ljava/lang/Object;Ljava/util/function/BiFunction;)Ljava/lang/Object;",
    "java/util/Map#putIfAbsent(Ljava/lang/Object;Ljava/lang/Object;)Ljava/lang/Object;",
    "java/util/Map#remove(Ljava/lang/Object;Ljava/lang/Object;)Z",
    "java/util/Map#replace(Ljava/lang/Object;Ljava/lang/Object;)Ljava/lang/Object;",
    "java/util/Map#replaceAll(Ljava/util/function/BiFunction;)V",
    "java/util/Optional",
    "java/util/OptionalDouble",
    "java/util/OptionalInt",
    "java/util/OptionalLong",
    "java/util/PrimitiveIterator",
    "java/util/Spliterator",
    "java/util/Spliterators",
    "java/util/StringJoiner",
    "java/util/TimeZone#getTimeZone(Ljava/time/ZoneId;)Ljava/util/TimeZone;",
    "java/util/TimeZone#toZoneId()Ljava/time/ZoneId;",
    "java/util/concurrent/ConcurrentHashMap",
    "java/util/concurrent/ConcurrentLinkedDeque",
    "java/util/concurrent/atomic/AtomicInteger#getAndUpdate(Ljava/util/function/IntUnaryOperator;)I",
    "java/util/concurrent/atomic/AtomicInteger#updateAndGet(Ljava/util/function/IntUnaryOperator;)I",
    "java/util/concurrent/atomic/AtomicLong#getAndUpdate(Ljava/util/function/LongUnaryOperator;)J",
    "java/util/concurrent/atomic/AtomicLong#updateAndGet(Ljava/util/function/LongUnaryOperator;)J",
    "java/util/concurrent/atomic/AtomicReference#getAndUpdate(Ljava/util/function/UnaryOperator;)Ljava/lang/Object;",
    "java/util/concurrent/atomic/AtomicReference#updateAndGet(Ljava/util/function/UnaryOperator;)Ljava/lang/Object;",
    "java/util/function/BiConsumer",
    "java/util/function/BiFunction",
    "java/util/function/BiPredicate",
    "java/util/function/BinaryOperator",
    "java/util/function/BooleanSupplier",
    "java/util/function/Consumer",
    "java/util/function/DoubleBinaryOperator",
    "java/util/function/DoubleFunction",
    "java/util/function/Function",
    "java/util/function/IntBinaryOperator",
    "java/util/function/IntConsumer",
    "java/util/function/IntFunction",
    "java/util/function/IntPredicate",
    "java/util/function/IntUnaryOperator",
    "java/util/function/LongBinaryOperator",
    "java/util/function/LongUnaryOperator",
    "java/util/function/Predicate",
    "java/util/function/Supplier",
    "java/util/function/ToIntFunction",
    "java/util/function/ToLongFunction",
    "java/util/function/UnaryOperator",
    "java/util/stream/Collector",
    "java/util/stream/Collectors",
    "java/util/stream/DoubleStream",
    "java/util/stream/IntStream",
    "java/util/stream/LongStream",
    "java/util/stream/Stream",
    "java/util/stream/StreamSupport",
];
